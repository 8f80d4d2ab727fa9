//! The placement record produced by the generator.

use std::ops::Deref;

use aurebesh_core::{Direction, Position};

/// Error returned when a word cannot be placed within the retry budget.
///
/// The whole generation call fails; no word is dropped or shortened. Words
/// that can never fit (longer than the grid, or empty) fail before any attempt
/// is made and report `attempts_exhausted == 0`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("could not place word {word:?} after {attempts_exhausted} attempts")]
pub struct PlacementError {
    /// The offending word, uppercased.
    pub word: String,
    /// Number of placement attempts made before giving up.
    pub attempts_exhausted: usize,
}

/// A word placed on the grid and the cells its letters occupy.
///
/// `coordinates` lists one cell per letter in placement direction order, so
/// the first element is the start cell and the last is the end cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedWord {
    /// The word, uppercased.
    pub word: String,
    /// Cells occupied by the letters of `word`, in order.
    pub coordinates: Vec<Position>,
}

impl PlacedWord {
    /// Returns the cell holding the first letter.
    ///
    /// # Panics
    ///
    /// Panics if the word has no coordinates, which the generator never
    /// produces.
    #[must_use]
    pub fn start(&self) -> Position {
        self.coordinates[0]
    }

    /// Returns the cell holding the last letter.
    ///
    /// # Panics
    ///
    /// Panics if the word has no coordinates, which the generator never
    /// produces.
    #[must_use]
    pub fn end(&self) -> Position {
        self.coordinates[self.coordinates.len() - 1]
    }

    /// Returns the direction the word was placed in.
    ///
    /// Single-letter words have no direction.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        let [first, second, ..] = self.coordinates.as_slice() else {
            return None;
        };
        let dr = isize::try_from(second.row()).ok()? - isize::try_from(first.row()).ok()?;
        let dc = isize::try_from(second.col()).ok()? - isize::try_from(first.col()).ok()?;
        Direction::from_delta(dr, dc)
    }

    /// Returns `true` if the two selected cells are this word's endpoints.
    ///
    /// Selection order does not matter: `(start, end)` and `(end, start)` both
    /// match. Nothing else does, not even a correct prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurebesh_core::Position;
    /// use aurebesh_generator::PlacedWord;
    ///
    /// let word = PlacedWord {
    ///     word: "CAT".to_owned(),
    ///     coordinates: vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    /// };
    /// assert!(word.matches_endpoints(Position::new(0, 0), Position::new(0, 2)));
    /// assert!(word.matches_endpoints(Position::new(0, 2), Position::new(0, 0)));
    /// assert!(!word.matches_endpoints(Position::new(0, 0), Position::new(0, 1)));
    /// ```
    #[must_use]
    pub fn matches_endpoints(&self, first: Position, last: Position) -> bool {
        let (start, end) = (self.start(), self.end());
        (first, last) == (start, end) || (first, last) == (end, start)
    }
}

/// Every word placed by one generation call, in input order.
///
/// Dereferences to a slice of [`PlacedWord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlacementRecord {
    words: Vec<PlacedWord>,
}

impl PlacementRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, word: PlacedWord) {
        self.words.push(word);
    }

    /// Returns the placed word whose endpoints are `first` and `last`, in
    /// either order.
    ///
    /// If several words share both endpoints (a palindrome placed over
    /// itself), the earliest one is returned.
    #[must_use]
    pub fn find_by_endpoints(&self, first: Position, last: Position) -> Option<&PlacedWord> {
        self.words
            .iter()
            .find(|word| word.matches_endpoints(first, last))
    }

    /// Consumes the record, returning the placed words.
    #[must_use]
    pub fn into_words(self) -> Vec<PlacedWord> {
        self.words
    }
}

impl Deref for PlacementRecord {
    type Target = [PlacedWord];

    fn deref(&self) -> &[PlacedWord] {
        &self.words
    }
}

impl From<Vec<PlacedWord>> for PlacementRecord {
    fn from(words: Vec<PlacedWord>) -> Self {
        Self { words }
    }
}

impl<'a> IntoIterator for &'a PlacementRecord {
    type Item = &'a PlacedWord;
    type IntoIter = std::slice::Iter<'a, PlacedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
