use aurebesh_core::{LetterGrid, Position};
use aurebesh_generator::{GeneratedPuzzle, PlacedWord};

use crate::{GameError, SelectionOutcome, TapOutcome};

/// A word-search game session.
///
/// Holds the generated puzzle, which of its words have been found, and the
/// first cell of an in-progress two-tap selection. Words are matched only by
/// their exact endpoints, in either order.
///
/// # Example
///
/// ```
/// use aurebesh_core::Position;
/// use aurebesh_game::{SelectionOutcome, TapOutcome, WordSearchGame};
/// use aurebesh_generator::{GeneratedPuzzle, PlacedWord, PuzzleSeed};
///
/// let puzzle = GeneratedPuzzle {
///     seed: PuzzleSeed::from_label("fixed"),
///     grid: "H A N\nX X X\nX X X".parse()?,
///     placements: vec![PlacedWord {
///         word: "HAN".to_owned(),
///         coordinates: vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
///     }]
///     .into(),
/// };
/// let mut game = WordSearchGame::new(puzzle);
///
/// assert!(game.tap(Position::new(0, 2))?.is_pending());
/// let TapOutcome::Resolved { outcome, .. } = game.tap(Position::new(0, 0))? else {
///     unreachable!();
/// };
/// assert_eq!(outcome, SelectionOutcome::Found("HAN".to_owned()));
/// assert!(game.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearchGame {
    puzzle: GeneratedPuzzle,
    found: Vec<bool>,
    pending: Option<Position>,
}

impl WordSearchGame {
    /// Starts a session with no words found.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let found = vec![false; puzzle.placements.len()];
        Self {
            puzzle,
            found,
            pending: None,
        }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &GeneratedPuzzle {
        &self.puzzle
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.puzzle.grid
    }

    /// Iterates over every word to find, in placement order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.puzzle.placements.iter().map(|placed| placed.word.as_str())
    }

    /// Iterates over the placed words found so far.
    pub fn found_words(&self) -> impl Iterator<Item = &PlacedWord> {
        self.placed_with_state(true)
    }

    /// Iterates over the placed words not found yet.
    pub fn remaining_words(&self) -> impl Iterator<Item = &PlacedWord> {
        self.placed_with_state(false)
    }

    fn placed_with_state(&self, found: bool) -> impl Iterator<Item = &PlacedWord> {
        self.puzzle
            .placements
            .iter()
            .zip(&self.found)
            .filter(move |&(_, &is_found)| is_found == found)
            .map(|(placed, _)| placed)
    }

    /// Returns the number of words found so far.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.iter().filter(|&&found| found).count()
    }

    /// Returns `true` once every placed word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.iter().all(|&found| found)
    }

    /// Checks whether `first` and `last` are the endpoints of a placed word.
    ///
    /// A match on a word not found yet marks it found. When several placed
    /// words share the same endpoints, the first unfound one is taken.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if either cell lies outside the grid.
    pub fn check_selection(
        &mut self,
        first: Position,
        last: Position,
    ) -> Result<SelectionOutcome, GameError> {
        self.ensure_in_bounds(first)?;
        self.ensure_in_bounds(last)?;

        let mut already_found = None;
        for (placed, found) in self.puzzle.placements.iter().zip(&mut self.found) {
            if !placed.matches_endpoints(first, last) {
                continue;
            }
            if !*found {
                *found = true;
                return Ok(SelectionOutcome::Found(placed.word.clone()));
            }
            already_found.get_or_insert_with(|| placed.word.clone());
        }
        Ok(already_found.map_or(SelectionOutcome::Miss, SelectionOutcome::AlreadyFound))
    }

    /// Records a tap in the two-tap selection flow.
    ///
    /// The first tap is held as pending. The second tap checks the pair with
    /// [`check_selection`](Self::check_selection) and clears the pending tap,
    /// whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the cell lies outside the grid.
    /// The pending tap is left unchanged in that case.
    pub fn tap(&mut self, pos: Position) -> Result<TapOutcome, GameError> {
        self.ensure_in_bounds(pos)?;
        let Some(first) = self.pending.take() else {
            self.pending = Some(pos);
            return Ok(TapOutcome::Pending(pos));
        };
        let outcome = self.check_selection(first, pos)?;
        Ok(TapOutcome::Resolved {
            first,
            last: pos,
            outcome,
        })
    }

    /// Returns the first cell of an in-progress selection, if any.
    #[must_use]
    pub fn pending_tap(&self) -> Option<Position> {
        self.pending
    }

    /// Drops an in-progress selection.
    pub fn clear_selection(&mut self) {
        self.pending = None;
    }

    /// Returns the letters on the straight line between two cells, for
    /// showing the current selection.
    ///
    /// Returns `None` when the cells are out of bounds or not aligned.
    #[must_use]
    pub fn selection_letters(&self, first: Position, last: Position) -> Option<String> {
        self.puzzle.grid.read_line(first, last)
    }

    fn ensure_in_bounds(&self, pos: Position) -> Result<(), GameError> {
        let size = self.puzzle.grid.size();
        if pos.is_within(size) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds { pos, size })
        }
    }
}
