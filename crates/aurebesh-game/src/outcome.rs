use aurebesh_core::Position;

/// Result of checking a first/last cell pair against the placed words.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// The cells are the endpoints of a word that had not been found yet.
    Found(String),
    /// The cells are the endpoints of a word that was already found.
    AlreadyFound(String),
    /// The cells are not the endpoints of any placed word.
    Miss,
}

/// Result of a single tap in the two-tap selection flow.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TapOutcome {
    /// The tap was recorded as the first cell of a selection.
    Pending(Position),
    /// The tap completed a selection, which has been checked.
    Resolved {
        /// The first tapped cell.
        first: Position,
        /// The second tapped cell.
        last: Position,
        /// Outcome of checking the pair.
        outcome: SelectionOutcome,
    },
}
