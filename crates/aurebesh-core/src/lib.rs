//! Core grid types for the Aurebesh word-search toolkit.
//!
//! This crate provides the geometry shared by puzzle generation and game
//! sessions:
//!
//! - [`position`]: [`Position`], a `(row, col)` cell coordinate.
//! - [`direction`]: [`Direction`], the four directions a word may run in.
//! - [`grid`]: [`LetterGrid`], a filled square grid of letters.
//!
//! # Examples
//!
//! ```
//! use aurebesh_core::{Direction, LetterGrid, Position};
//!
//! let grid: LetterGrid = "
//!     C A T
//!     X O Y
//!     Z Q W
//! "
//! .parse()?;
//!
//! assert_eq!(grid.size(), 3);
//! assert_eq!(grid[Position::new(0, 2)], 'T');
//! assert_eq!(
//!     grid.read_line(Position::new(0, 0), Position::new(0, 2)).as_deref(),
//!     Some("CAT"),
//! );
//!
//! let next = Position::new(0, 0).step(Direction::DiagonalDown, 2, grid.size());
//! assert_eq!(next, Some(Position::new(2, 2)));
//! # Ok::<(), aurebesh_core::GridError>(())
//! ```

pub mod direction;
pub mod grid;
pub mod position;

pub use self::{
    direction::Direction,
    grid::{GridError, LetterGrid},
    position::Position,
};
