use std::{io, path::PathBuf};

/// Errors that can occur while loading or saving a store file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    #[display("failed to read {}", path.display())]
    Read {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file could not be written or replaced.
    #[display("failed to write {}", path.display())]
    Write {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file contents are not valid for this store.
    #[display("failed to parse {}", path.display())]
    Parse {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The store could not be encoded as JSON.
    #[display("failed to serialize {}", path.display())]
    Serialize {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Errors for operations on flash-card tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TierError {
    /// No deck is defined for the tier.
    #[display("tier {tier} does not exist")]
    UnknownTier {
        /// The requested tier.
        tier: u8,
    },
}
