//! Benchmarks for word-search puzzle generation.
//!
//! # Benchmarks
//!
//! - **`generator_sparse`**: Places the six-word "MAY THE FORCE BE WITH YOU"
//!   list on the default 12×12 grid, where nearly every word lands on its
//!   first attempt.
//! - **`generator_dense`**: Places a longer vocabulary list on a 10×10 grid,
//!   where overlaps and retries dominate.
//!
//! # Test Data
//!
//! Each case runs with three seeds derived from the labels `bench-0`,
//! `bench-1` and `bench-2`, so results stay comparable between runs.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use aurebesh_generator::{PuzzleGenerator, PuzzleSeed};
use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};

const SEED_LABELS: [&str; 3] = ["bench-0", "bench-1", "bench-2"];

const SPARSE_WORDS: [&str; 6] = ["MAY", "THE", "FORCE", "BE", "WITH", "YOU"];

const DENSE_WORDS: [&str; 12] = [
    "BLASTER", "COMLINK", "DATAPAD", "PODRACER", "WOOKIEE", "TATOOINE", "NABOO", "HOTH",
    "ENDOR", "KAMINO", "DAGOBAH", "HOLOCRON",
];

fn bench_words(c: &mut Criterion, name: &str, generator: PuzzleGenerator, words: &[&str]) {
    for label in SEED_LABELS {
        let seed = PuzzleSeed::from_label(label);
        c.bench_with_input(BenchmarkId::new(name, label), &seed, |b, seed| {
            b.iter_batched(
                || hint::black_box(*seed),
                |seed| generator.generate_with_seed(words, seed),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_generator_sparse(c: &mut Criterion) {
    bench_words(c, "generator_sparse", PuzzleGenerator::default(), &SPARSE_WORDS);
}

fn bench_generator_dense(c: &mut Criterion) {
    bench_words(c, "generator_dense", PuzzleGenerator::new(10), &DENSE_WORDS);
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_sparse,
        bench_generator_dense
);
criterion_main!(benches);
