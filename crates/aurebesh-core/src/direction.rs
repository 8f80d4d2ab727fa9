//! Directions a placed word can run in.

use std::fmt::{self, Display};

/// One of the four unit steps consecutive letters of a placed word follow.
///
/// Steps are `(Δrow, Δcol)` pairs. Every direction advances one column to the
/// right except [`Vertical`](Self::Vertical); reversed readings are covered by
/// selecting a word from its last cell to its first.
///
/// # Examples
///
/// ```
/// use aurebesh_core::Direction;
///
/// assert_eq!(Direction::Horizontal.delta(), (0, 1));
/// assert_eq!(Direction::DiagonalUp.delta(), (-1, 1));
/// assert_eq!(Direction::from_delta(1, 1), Some(Direction::DiagonalDown));
/// assert_eq!(Direction::from_delta(0, -1), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row, `(0, +1)`.
    Horizontal,
    /// Top to bottom along a column, `(+1, 0)`.
    Vertical,
    /// Down and to the right, `(+1, +1)`.
    DiagonalDown,
    /// Up and to the right, `(-1, +1)`.
    DiagonalUp,
}

impl Direction {
    /// All four directions, in the order the generator draws from.
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalDown,
        Self::DiagonalUp,
    ];

    /// Returns the `(Δrow, Δcol)` step of this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalDown => (1, 1),
            Self::DiagonalUp => (-1, 1),
        }
    }

    /// Returns the direction with the given step, if it is one of the four.
    #[must_use]
    pub const fn from_delta(dr: isize, dc: isize) -> Option<Self> {
        match (dr, dc) {
            (0, 1) => Some(Self::Horizontal),
            (1, 0) => Some(Self::Vertical),
            (1, 1) => Some(Self::DiagonalDown),
            (-1, 1) => Some(Self::DiagonalUp),
            _ => None,
        }
    }

    /// Returns a short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::DiagonalDown => "diagonal down",
            Self::DiagonalUp => "diagonal up",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
