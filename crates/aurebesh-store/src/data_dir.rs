use std::path::{Path, PathBuf};

use crate::{HistoryLog, SavedPhrases, StoreError, UnlockedTiers};

/// The directory holding every store file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// File name of the translation history.
    pub const HISTORY_FILE: &'static str = "history.json";
    /// File name of the saved phrases.
    pub const SAVED_PHRASES_FILE: &'static str = "saved_phrases.json";
    /// File name of the unlocked tiers.
    pub const UNLOCKED_TIERS_FILE: &'static str = "unlocked_tiers.json";

    /// Uses `root` as the data directory. It is created on first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the history file.
    #[must_use]
    pub fn history_path(&self) -> PathBuf {
        self.root.join(Self::HISTORY_FILE)
    }

    /// Returns the path of the saved phrases file.
    #[must_use]
    pub fn saved_phrases_path(&self) -> PathBuf {
        self.root.join(Self::SAVED_PHRASES_FILE)
    }

    /// Returns the path of the unlocked tiers file.
    #[must_use]
    pub fn unlocked_tiers_path(&self) -> PathBuf {
        self.root.join(Self::UNLOCKED_TIERS_FILE)
    }

    /// Loads the translation history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    pub fn load_history(&self) -> Result<HistoryLog, StoreError> {
        HistoryLog::load(&self.history_path())
    }

    /// Saves the translation history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save_history(&self, history: &HistoryLog) -> Result<(), StoreError> {
        history.save(&self.history_path())
    }

    /// Loads the saved phrases.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    pub fn load_saved_phrases(&self) -> Result<SavedPhrases, StoreError> {
        SavedPhrases::load(&self.saved_phrases_path())
    }

    /// Saves the saved phrases.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save_saved_phrases(&self, phrases: &SavedPhrases) -> Result<(), StoreError> {
        phrases.save(&self.saved_phrases_path())
    }

    /// Loads the unlocked tiers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    pub fn load_unlocked_tiers(&self) -> Result<UnlockedTiers, StoreError> {
        UnlockedTiers::load(&self.unlocked_tiers_path())
    }

    /// Saves the unlocked tiers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save_unlocked_tiers(&self, tiers: &UnlockedTiers) -> Result<(), StoreError> {
        tiers.save(&self.unlocked_tiers_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let dir = DataDir::new("/var/lib/aurebesh");
        assert_eq!(dir.root(), Path::new("/var/lib/aurebesh"));
        assert_eq!(
            dir.history_path(),
            Path::new("/var/lib/aurebesh/history.json")
        );
        assert_eq!(
            dir.saved_phrases_path(),
            Path::new("/var/lib/aurebesh/saved_phrases.json")
        );
        assert_eq!(
            dir.unlocked_tiers_path(),
            Path::new("/var/lib/aurebesh/unlocked_tiers.json")
        );
    }

    #[test]
    fn test_fresh_directory_loads_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let dir = DataDir::new(temp.path().join("not-yet-created"));
        assert!(dir.load_history().unwrap().is_empty());
        assert!(dir.load_saved_phrases().unwrap().is_empty());
        assert_eq!(dir.load_unlocked_tiers().unwrap(), UnlockedTiers::new());

        let mut tiers = UnlockedTiers::new();
        tiers.unlock(2).unwrap();
        dir.save_unlocked_tiers(&tiers).unwrap();
        assert!(dir.root().is_dir());
        assert_eq!(dir.load_unlocked_tiers().unwrap(), tiers);
    }
}
