use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::{StoreError, json_file};

/// One translation in the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The English input.
    pub english: String,
    /// The transliterated output.
    pub aurebesh: String,
    /// Whether the entry is marked as a favorite.
    #[serde(default)]
    pub favorite: bool,
    /// When the entry was recorded.
    pub timestamp: Timestamp,
}

/// Recording time of a [`HistoryEntry`].
///
/// New entries store seconds since the Unix epoch. Files written by the
/// earlier Python app hold ISO-8601 text instead, which is kept verbatim so
/// that it survives a load and save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Seconds since the Unix epoch.
    Unix(u64),
    /// An ISO-8601 date and time, such as `2025-09-01T12:00:00.000000`.
    Iso8601(String),
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix(secs) => write!(f, "{secs}"),
            Self::Iso8601(text) => f.write_str(text),
        }
    }
}

/// Chronological log of translations, oldest first.
///
/// Persisted as a JSON array of [`HistoryEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the log from `path`. A missing file gives an empty log.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        json_file::load_or_default(path)
    }

    /// Saves the log to `path`, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        json_file::save(path, self)
    }

    /// Returns all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a translation.
    ///
    /// Blank input is ignored, and so is input identical to the most recent
    /// entry. Returns `true` if an entry was added.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurebesh_store::HistoryLog;
    ///
    /// let mut log = HistoryLog::new();
    /// assert!(log.record("hello", "HELLO", 0));
    /// assert!(!log.record("hello", "HELLO", 1));
    /// assert!(!log.record("   ", "", 2));
    /// assert_eq!(log.len(), 1);
    /// ```
    pub fn record(&mut self, english: &str, aurebesh: &str, timestamp: u64) -> bool {
        if english.trim().is_empty() {
            return false;
        }
        if self.entries.last().is_some_and(|last| last.english == english) {
            return false;
        }
        self.entries.push(HistoryEntry {
            english: english.to_owned(),
            aurebesh: aurebesh.to_owned(),
            favorite: false,
            timestamp: Timestamp::Unix(timestamp),
        });
        true
    }

    /// Flips the favorite flag of the entry at `index`.
    ///
    /// Returns the new flag, or `None` if there is no such entry.
    pub fn toggle_favorite(&mut self, index: usize) -> Option<bool> {
        let entry = self.entries.get_mut(index)?;
        entry.favorite = !entry.favorite;
        Some(entry.favorite)
    }

    /// Removes and returns the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<HistoryEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the favorite entries.
    pub fn favorites(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(|entry| entry.favorite)
    }
}
