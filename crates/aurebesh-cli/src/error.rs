use std::io;

use aurebesh_generator::PlacementError;
use aurebesh_store::{StoreError, TierError};

/// Errors reported by the command-line interface.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// Loading or saving user data failed.
    #[display("data store error")]
    Store(StoreError),
    /// A tier argument was rejected.
    #[display("invalid tier")]
    Tier(TierError),
    /// The words did not fit in the grid.
    #[display("puzzle generation failed")]
    Placement(PlacementError),
    /// Reading input or writing output failed.
    #[display("terminal I/O error")]
    Io(io::Error),
    /// No history entry exists at the index.
    #[display("no history entry at index {index}")]
    #[from(skip)]
    NoHistoryEntry {
        /// The requested index.
        index: usize,
    },
}
