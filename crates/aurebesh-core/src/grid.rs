//! Filled square letter grids.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::Position;

/// Errors raised when building or parsing a [`LetterGrid`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The number of cells is not `size * size`.
    #[display("expected {expected} cells, found {actual}")]
    CellCount {
        /// Number of cells a square grid of the requested size holds.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A parsed row does not have as many cells as there are rows.
    #[display("row {row} has {len} cells, expected {size}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found in the row.
        len: usize,
        /// Expected row length.
        size: usize,
    },
    /// A parsed cell token is longer than one character.
    #[display("cell ({row}, {col}) holds {token:?}, expected a single character")]
    WideCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending token.
        token: String,
    },
}

/// A square grid holding exactly one character per cell.
///
/// Cells are stored in row-major order. A grid is always completely filled;
/// partially filled boards only exist inside the generator.
///
/// The [`Display`] form is one line per row with cells separated by a single
/// space, and [`FromStr`] accepts the same format with arbitrary surrounding
/// whitespace and blank lines. Cells that are themselves whitespace do not
/// survive that round trip.
///
/// # Examples
///
/// ```
/// use aurebesh_core::{LetterGrid, Position};
///
/// let grid = LetterGrid::from_cells(2, vec!['A', 'B', 'C', 'D'])?;
/// assert_eq!(grid[Position::new(1, 0)], 'C');
/// assert_eq!(grid.to_string(), "A B\nC D");
///
/// let parsed: LetterGrid = "A B\nC D".parse()?;
/// assert_eq!(parsed, grid);
/// # Ok::<(), aurebesh_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<char>,
}

impl LetterGrid {
    /// Builds a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCount`] if `cells.len() != size * size`.
    pub fn from_cells(size: usize, cells: Vec<char>) -> Result<Self, GridError> {
        let expected = size * size;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Builds a grid by calling `f` once per cell in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurebesh_core::{LetterGrid, Position};
    ///
    /// let grid = LetterGrid::from_fn(3, |pos| if pos.row() == pos.col() { 'X' } else { '.' });
    /// assert_eq!(grid.to_string(), "X . .\n. X .\n. . X");
    /// ```
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> char,
    {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(Position::new(row, col)));
            }
        }
        Self { size, cells }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        pos.is_within(self.size)
            .then(|| self.cells[pos.row() * self.size + pos.col()])
    }

    /// Returns the cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Reads the letters on the straight line from `from` to `to`, inclusive.
    ///
    /// Returns `None` if either end lies outside the grid or the two cells do
    /// not share a row, a column, or a 45° diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurebesh_core::{LetterGrid, Position};
    ///
    /// let grid: LetterGrid = "T X X\nX A X\nX X C".parse()?;
    /// let letters = grid.read_line(Position::new(2, 2), Position::new(0, 0));
    /// assert_eq!(letters.as_deref(), Some("CAT"));
    /// # Ok::<(), aurebesh_core::GridError>(())
    /// ```
    #[must_use]
    pub fn read_line(&self, from: Position, to: Position) -> Option<String> {
        if !from.is_within(self.size) || !to.is_within(self.size) {
            return None;
        }
        let line = from.line_to(to)?;
        Some(line.into_iter().map(|pos| self[pos]).collect())
    }
}

impl Index<Position> for LetterGrid {
    type Output = char;

    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    fn index(&self, pos: Position) -> &char {
        assert!(
            pos.is_within(self.size),
            "position {pos} out of bounds for grid of size {}",
            self.size
        );
        &self.cells[pos.row() * self.size + pos.col()]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for LetterGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let tokens = line.split_whitespace().collect::<Vec<_>>();
            if tokens.len() != size {
                return Err(GridError::RaggedRow {
                    row,
                    len: tokens.len(),
                    size,
                });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => cells.push(ch),
                    _ => {
                        return Err(GridError::WideCell {
                            row,
                            col,
                            token: token.to_owned(),
                        });
                    }
                }
            }
        }
        Self::from_cells(size, cells)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_cells_rejects_wrong_count() {
        assert_eq!(
            LetterGrid::from_cells(3, vec!['A'; 8]),
            Err(GridError::CellCount {
                expected: 9,
                actual: 8
            })
        );
    }

    #[test]
    fn test_empty_grid() {
        let grid = LetterGrid::from_cells(0, Vec::new()).unwrap();
        assert_eq!(grid.size(), 0);
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.to_string(), "");
        assert_eq!("".parse::<LetterGrid>().unwrap(), grid);
    }

    #[test]
    fn test_get_and_index() {
        let grid: LetterGrid = "A B\nC D".parse().unwrap();
        assert_eq!(grid.get(Position::new(0, 1)), Some('B'));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid[Position::new(1, 1)], 'D');
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let grid: LetterGrid = "A B\nC D".parse().unwrap();
        let _ = grid[Position::new(0, 2)];
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "A B\nC".parse::<LetterGrid>(),
            Err(GridError::RaggedRow {
                row: 1,
                len: 1,
                size: 2
            })
        );
        assert_eq!(
            "AB C\nD E".parse::<LetterGrid>(),
            Err(GridError::WideCell {
                row: 0,
                col: 0,
                token: "AB".to_owned()
            })
        );
    }

    #[test]
    fn test_read_line() {
        let grid: LetterGrid = "
            C A T
            O X Y
            W Z Q
        "
        .parse()
        .unwrap();
        let read = |a: (usize, usize), b: (usize, usize)| grid.read_line(a.into(), b.into());
        assert_eq!(read((0, 0), (0, 2)).as_deref(), Some("CAT"));
        assert_eq!(read((0, 2), (0, 0)).as_deref(), Some("TAC"));
        assert_eq!(read((0, 0), (2, 0)).as_deref(), Some("COW"));
        assert_eq!(read((2, 0), (0, 2)).as_deref(), Some("WXT"));
        assert_eq!(read((1, 1), (1, 1)).as_deref(), Some("X"));
        assert_eq!(read((0, 0), (1, 2)), None);
        assert_eq!(read((0, 0), (0, 3)), None);
    }

    proptest! {
        #[test]
        fn display_parse_round_trip(
            (size, cells) in (0usize..8).prop_flat_map(|size| {
                (Just(size), prop::collection::vec(prop::char::range('A', 'Z'), size * size))
            })
        ) {
            let grid = LetterGrid::from_cells(size, cells).unwrap();
            let parsed: LetterGrid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
