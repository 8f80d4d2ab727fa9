use aurebesh_core::Position;

/// Errors that can occur during game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A selected cell lies outside the grid.
    #[display("position {pos} is outside the {size}x{size} grid")]
    OutOfBounds {
        /// The rejected position.
        pos: Position,
        /// Side length of the grid.
        size: usize,
    },
}
