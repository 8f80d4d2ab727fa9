//! Word-search game session management.
//!
//! This crate turns a generated puzzle into a playable session: it verifies
//! selections against the placement record and tracks which words have been
//! found.
//!
//! # Overview
//!
//! - [`WordSearchGame`]: the session itself.
//! - [`SelectionOutcome`]: result of checking a first/last cell pair.
//! - [`TapOutcome`]: result of the two-tap selection flow.
//! - [`GameError`]: rejected operations.
//!
//! # Examples
//!
//! ```
//! use aurebesh_game::{SelectionOutcome, WordSearchGame};
//! use aurebesh_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let puzzle = PuzzleGenerator::new(6).generate_with_seed(&["YODA"], PuzzleSeed::from_label("demo"))?;
//! let yoda = puzzle.placements[0].clone();
//! let mut game = WordSearchGame::new(puzzle);
//!
//! // Selecting from either end finds the word.
//! assert_eq!(
//!     game.check_selection(yoda.end(), yoda.start())?,
//!     SelectionOutcome::Found("YODA".to_owned()),
//! );
//! assert!(game.is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::GameError, game::WordSearchGame, outcome::*};

mod error;
mod game;
mod outcome;
