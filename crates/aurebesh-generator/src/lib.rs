//! Word-search puzzle generation.
//!
//! Words are placed on a square grid along one of four directions (see
//! [`Direction`](aurebesh_core::Direction)) by a bounded randomized search.
//! Cells may be shared by several words when they need the same letter. Each
//! word gets [`MAX_PLACEMENT_ATTEMPTS`] tries; a word that still cannot be
//! placed fails the whole call with a [`PlacementError`]. Leftover cells are
//! filled with random letters.
//!
//! The random source is always supplied by the caller: either any
//! [`rand::Rng`] through [`generate_puzzle`], or a [`PuzzleSeed`] through
//! [`PuzzleGenerator`], which makes every puzzle reproducible.
//!
//! The resulting [`PlacementRecord`] is what selection checks run against:
//! a pair of selected cells matches a word when they are its first and last
//! cell, in either order.
//!
//! # Examples
//!
//! ```
//! use aurebesh_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let words = ["MAY", "THE", "FORCE", "BE", "WITH", "YOU"];
//! let puzzle = PuzzleGenerator::default()
//!     .generate_with_seed(&words, PuzzleSeed::from_label("may the fourth"))?;
//!
//! let force = &puzzle.placements[2];
//! assert_eq!(force.word, "FORCE");
//! let found = puzzle.placements.find_by_endpoints(force.end(), force.start());
//! assert_eq!(found.map(|w| w.word.as_str()), Some("FORCE"));
//! # Ok::<(), aurebesh_generator::PlacementError>(())
//! ```

pub mod generator;
pub mod placement;
pub mod seed;

pub use self::{
    generator::{
        DEFAULT_GRID_SIZE, FILLER_ALPHABET, GeneratedPuzzle, MAX_PLACEMENT_ATTEMPTS,
        PuzzleGenerator, generate_puzzle,
    },
    placement::{PlacedWord, PlacementError, PlacementRecord},
    seed::{PuzzleSeed, SEED_LEN, SeedParseError},
};
