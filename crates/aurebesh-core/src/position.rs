//! Grid cell coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate in a square grid.
///
/// Rows grow downwards and columns grow to the right; `(0, 0)` is the top-left
/// cell. A position carries no grid size, so bounds are checked against a size
/// supplied by the caller.
///
/// # Examples
///
/// ```
/// use aurebesh_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 5);
/// assert!(pos.is_within(6));
/// assert!(!pos.is_within(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns `true` if this position lies inside a `size × size` grid.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Moves `distance` cells along `direction`.
    ///
    /// Returns `None` if the destination falls outside a `size × size` grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurebesh_core::{Direction, Position};
    ///
    /// let start = Position::new(4, 0);
    /// assert_eq!(
    ///     start.step(Direction::DiagonalUp, 3, 5),
    ///     Some(Position::new(1, 3)),
    /// );
    /// assert_eq!(start.step(Direction::DiagonalUp, 5, 5), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize, size: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = offset(self.row, dr, distance)?;
        let col = offset(self.col, dc, distance)?;
        let pos = Self::new(row, col);
        pos.is_within(size).then_some(pos)
    }

    /// Returns the straight line of cells from `self` to `end`, both inclusive.
    ///
    /// The line may run along a row, a column, or a 45° diagonal, in either
    /// reading order. Returns `None` when the two cells are not aligned.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurebesh_core::Position;
    ///
    /// let line = Position::new(2, 2).line_to(Position::new(0, 0)).unwrap();
    /// assert_eq!(
    ///     line,
    ///     [Position::new(2, 2), Position::new(1, 1), Position::new(0, 0)],
    /// );
    ///
    /// assert!(Position::new(0, 0).line_to(Position::new(1, 2)).is_none());
    /// ```
    #[must_use]
    pub fn line_to(self, end: Self) -> Option<Vec<Self>> {
        let row_dist = self.row.abs_diff(end.row);
        let col_dist = self.col.abs_diff(end.col);
        if row_dist != 0 && col_dist != 0 && row_dist != col_dist {
            return None;
        }
        let len = row_dist.max(col_dist);
        let line = (0..=len)
            .map(|i| {
                Self::new(
                    toward(self.row, end.row, i),
                    toward(self.col, end.col, i),
                )
            })
            .collect();
        Some(line)
    }
}

fn offset(base: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        1 => base.checked_add(distance),
        _ => base.checked_sub(distance),
    }
}

fn toward(from: usize, to: usize, i: usize) -> usize {
    if to >= from { from + i.min(to - from) } else { from - i.min(from - to) }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
