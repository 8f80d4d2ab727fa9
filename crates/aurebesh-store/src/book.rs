use crate::{DataDir, HistoryLog, SavedPhrases, StoreError};

/// Translation history and saved phrases, kept in sync.
///
/// Marking a history entry as a favorite saves its English text; clearing
/// the mark removes it from the saved phrases again.
///
/// # Examples
///
/// ```
/// use aurebesh_store::PhraseBook;
///
/// let mut book = PhraseBook::default();
/// book.history_mut().record("Hello there", "HELLO \u{E018}ERE", 0);
///
/// assert_eq!(book.toggle_favorite(0), Some(true));
/// assert!(book.saved().contains("Hello there"));
/// assert_eq!(book.toggle_favorite(0), Some(false));
/// assert!(book.saved().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseBook {
    history: HistoryLog,
    saved: SavedPhrases,
}

impl PhraseBook {
    /// Combines an existing history and saved phrase list.
    #[must_use]
    pub fn new(history: HistoryLog, saved: SavedPhrases) -> Self {
        Self { history, saved }
    }

    /// Loads both stores from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either file cannot be read or parsed.
    pub fn load(dir: &DataDir) -> Result<Self, StoreError> {
        Ok(Self {
            history: dir.load_history()?,
            saved: dir.load_saved_phrases()?,
        })
    }

    /// Saves both stores to `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either file cannot be written.
    pub fn save(&self, dir: &DataDir) -> Result<(), StoreError> {
        dir.save_history(&self.history)?;
        dir.save_saved_phrases(&self.saved)
    }

    /// Returns the translation history.
    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Returns the translation history for recording or removing entries.
    pub fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    /// Returns the saved phrases.
    #[must_use]
    pub fn saved(&self) -> &SavedPhrases {
        &self.saved
    }

    /// Returns the saved phrases for adding or removing phrases.
    pub fn saved_mut(&mut self) -> &mut SavedPhrases {
        &mut self.saved
    }

    /// Flips the favorite flag of a history entry and updates the saved
    /// phrases to match.
    ///
    /// Returns the new flag, or `None` if there is no such entry.
    pub fn toggle_favorite(&mut self, index: usize) -> Option<bool> {
        let favorite = self.history.toggle_favorite(index)?;
        let english = self.history.get(index)?.english.as_str();
        if favorite {
            self.saved.add(english);
        } else {
            self.saved.remove(english);
        }
        Some(favorite)
    }

    /// Splits the book back into its stores.
    #[must_use]
    pub fn into_parts(self) -> (HistoryLog, SavedPhrases) {
        (self.history, self.saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> PhraseBook {
        let mut history = HistoryLog::new();
        history.record("I am your father", "I AM YOUR FA\u{E018}ER", 1);
        history.record("No", "NO", 2);
        PhraseBook::new(history, SavedPhrases::new())
    }

    #[test]
    fn test_favorite_is_saved_once() {
        let mut book = book();
        book.saved_mut().add("I am your father");
        assert_eq!(book.toggle_favorite(0), Some(true));
        assert_eq!(book.saved().len(), 1);
    }

    #[test]
    fn test_unfavorite_removes_saved() {
        let mut book = book();
        book.toggle_favorite(1);
        book.toggle_favorite(0);
        assert_eq!(book.saved().iter().collect::<Vec<_>>(), ["No", "I am your father"]);
        book.toggle_favorite(1);
        assert_eq!(book.saved().iter().collect::<Vec<_>>(), ["I am your father"]);
        assert_eq!(book.history().favorites().count(), 1);
    }

    #[test]
    fn test_toggle_missing_entry() {
        let mut book = book();
        assert_eq!(book.toggle_favorite(2), None);
        assert!(book.saved().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().unwrap();
        let dir = DataDir::new(temp.path());
        let mut book = book();
        book.toggle_favorite(0);
        book.save(&dir).unwrap();

        let loaded = PhraseBook::load(&dir).unwrap();
        assert_eq!(loaded, book);
        let (history, saved) = loaded.into_parts();
        assert_eq!(history.len(), 2);
        assert!(saved.contains("I am your father"));
    }
}
