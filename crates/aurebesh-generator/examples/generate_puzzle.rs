//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Generate a puzzle from a word list with a `PuzzleGenerator`
//! - Reproduce a puzzle from its seed
//! - Estimate how often a word list fits a grid size by sampling many seeds
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- MAY THE FORCE BE WITH YOU
//! ```
//!
//! Reproduce a puzzle from a printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <HEX> MAY THE FORCE
//! ```
//!
//! Sample many seeds to measure the placement success rate (default grid: 12):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 8 --samples 10000 TATOOINE CORUSCANT NABOO
//! ```

use std::process;

use aurebesh_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use clap::Parser;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length.
    #[arg(long, value_name = "N", default_value_t = aurebesh_generator::DEFAULT_GRID_SIZE)]
    size: usize,

    /// Seed to reproduce (64 hex digits).
    #[arg(long, value_name = "HEX", conflicts_with = "samples")]
    seed: Option<PuzzleSeed>,

    /// Number of random seeds to sample instead of printing one puzzle.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,

    /// Words to place.
    #[arg(value_name = "WORD", required = true)]
    words: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.size);

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        let placed = (0..samples)
            .into_par_iter()
            .filter(|_| generator.generate(&args.words).is_ok())
            .count();
        #[expect(clippy::cast_precision_loss)]
        let rate = placed as f64 / samples as f64 * 100.0;
        println!("Samples: {samples}");
        println!("Placed:  {placed} ({rate:.1}%)");
        return;
    }

    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    match generator.generate_with_seed(&args.words, seed) {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("Seed: {seed}");
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Placements:");
    for placed in &puzzle.placements {
        let direction = placed
            .direction()
            .map_or_else(|| "single cell".to_owned(), |d| d.to_string());
        println!(
            "  {}: {} -> {} ({direction})",
            placed.word,
            placed.start(),
            placed.end()
        );
    }
}
