//! Persisted user data: translation history, saved phrases and unlocked
//! flash-card tiers.
//!
//! Every store is a plain value with explicit `load` / `save` methods that
//! return [`StoreError`]. A file that does not exist yet loads as the empty
//! store; a file that exists but cannot be parsed is reported, never silently
//! replaced. Saving writes pretty-printed JSON to a temporary file in the same
//! directory and then moves it over the target.
//!
//! # Overview
//!
//! - [`HistoryLog`]: translations in the order they were made.
//! - [`SavedPhrases`]: phrases kept by the user, shown after the
//!   [`PRESET_PHRASES`].
//! - [`PhraseBook`]: both of the above, with favorites kept in sync.
//! - [`UnlockedTiers`] and the [`tiers`] module: flash-card decks.
//! - [`DataDir`]: where the files live.
//!
//! # Examples
//!
//! ```
//! use aurebesh_store::{DataDir, PhraseBook};
//!
//! let temp = tempfile::tempdir()?;
//! let dir = DataDir::new(temp.path());
//!
//! let mut book = PhraseBook::load(&dir)?;
//! book.history_mut().record("Stay on target", "STAY ON TARGET", 0);
//! book.toggle_favorite(0);
//! book.save(&dir)?;
//!
//! let book = PhraseBook::load(&dir)?;
//! assert!(book.saved().contains("Stay on target"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod tiers;

mod book;
mod data_dir;
mod error;
mod history;
mod json_file;
mod phrases;

pub use self::{
    book::PhraseBook,
    data_dir::DataDir,
    error::{StoreError, TierError},
    history::{HistoryEntry, HistoryLog, Timestamp},
    phrases::{PRESET_PHRASES, SavedPhrases},
    tiers::UnlockedTiers,
};
