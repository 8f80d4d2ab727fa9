//! Randomized word placement.

use std::ops::Range;

use aurebesh_core::{Direction, LetterGrid, Position};
use rand::{Rng, RngExt as _};

use crate::{PlacedWord, PlacementError, PlacementRecord, PuzzleSeed};

/// Number of random placements tried for each word before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Grid side length used by [`PuzzleGenerator::default()`].
pub const DEFAULT_GRID_SIZE: usize = 12;

/// Letters drawn for cells no word occupies.
pub const FILLER_ALPHABET: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A generated word-search puzzle together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Seed that reproduces this puzzle with the same words and grid size.
    pub seed: PuzzleSeed,
    /// The completely filled letter grid.
    pub grid: LetterGrid,
    /// Where each input word was placed, in input order.
    pub placements: PlacementRecord,
}

/// Generates word-search puzzles of a fixed grid size.
///
/// # Examples
///
/// ```
/// use aurebesh_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(8);
/// let seed = PuzzleSeed::from_label("example");
/// let puzzle = generator.generate_with_seed(&["jedi", "sith"], seed)?;
///
/// assert_eq!(puzzle.grid.size(), 8);
/// assert_eq!(puzzle.placements[0].word, "JEDI");
///
/// // The same seed always rebuilds the same puzzle.
/// assert_eq!(generator.generate_with_seed(&["jedi", "sith"], seed)?, puzzle);
/// # Ok::<(), aurebesh_generator::PlacementError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    size: usize,
    max_attempts: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl PuzzleGenerator {
    /// Creates a generator for `size × size` grids that tries each word
    /// [`MAX_PLACEMENT_ATTEMPTS`] times.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Sets how many placements are tried for each word.
    #[must_use]
    pub const fn with_max_attempts(self, max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    /// Returns the grid side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns how many placements are tried for each word.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generates a puzzle from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] if a word cannot be placed.
    pub fn generate<S>(&self, words: &[S]) -> Result<GeneratedPuzzle, PlacementError>
    where
        S: AsRef<str>,
    {
        self.generate_with_seed(words, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] if a word cannot be placed.
    pub fn generate_with_seed<S>(
        &self,
        words: &[S],
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, PlacementError>
    where
        S: AsRef<str>,
    {
        let (grid, placements) =
            place_words(words, self.size, self.max_attempts, &mut seed.rng())?;
        Ok(GeneratedPuzzle {
            seed,
            grid,
            placements,
        })
    }
}

/// Places `words` on a `size × size` grid and fills the remaining cells.
///
/// Words are processed in the given order, since earlier words constrain later
/// ones. Each word is uppercased, then up to [`MAX_PLACEMENT_ATTEMPTS`] times a
/// direction and an on-grid start cell are drawn uniformly; an attempt
/// succeeds when every target cell is empty or already holds the required
/// letter. Once all words are placed, each empty cell gets an independent
/// uniform letter from [`FILLER_ALPHABET`].
///
/// # Errors
///
/// Returns [`PlacementError`] for the first word that cannot be placed. The
/// whole call fails; nothing is retried with another order or grid size.
/// A grid whose cell count overflows `usize` fails on the first word.
///
/// # Examples
///
/// ```
/// use aurebesh_generator::generate_puzzle;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let mut rng = Pcg64::seed_from_u64(42);
/// let (grid, placements) = generate_puzzle(&["cat"], 3, &mut rng)?;
///
/// let cat = &placements[0];
/// assert_eq!(cat.word, "CAT");
/// assert_eq!(grid.read_line(cat.start(), cat.end()).as_deref(), Some("CAT"));
///
/// let err = generate_puzzle(&["SUPERCALIFRAGILISTIC"], 5, &mut rng).unwrap_err();
/// assert_eq!(err.word, "SUPERCALIFRAGILISTIC");
/// # Ok::<(), aurebesh_generator::PlacementError>(())
/// ```
pub fn generate_puzzle<S, R>(
    words: &[S],
    size: usize,
    rng: &mut R,
) -> Result<(LetterGrid, PlacementRecord), PlacementError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    place_words(words, size, MAX_PLACEMENT_ATTEMPTS, rng)
}

fn place_words<S, R>(
    words: &[S],
    size: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(LetterGrid, PlacementRecord), PlacementError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let Some(mut board) = Board::new(size) else {
        let word = words.first().map_or_else(String::new, |w| w.as_ref().to_uppercase());
        log::warn!("a {size}x{size} grid is too large");
        return Err(PlacementError {
            word,
            attempts_exhausted: 0,
        });
    };
    let mut placements = PlacementRecord::new();
    for word in words {
        let placed = board.place(word.as_ref(), max_attempts, rng)?;
        placements.push(placed);
    }
    Ok((board.fill(rng), placements))
}

#[derive(Debug)]
struct Board {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Board {
    fn new(size: usize) -> Option<Self> {
        let len = size.checked_mul(size)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, None);
        Some(Self { size, cells })
    }

    fn cell(&self, pos: Position) -> Option<char> {
        self.cells[pos.row() * self.size + pos.col()]
    }

    fn place<R>(
        &mut self,
        word: &str,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<PlacedWord, PlacementError>
    where
        R: Rng + ?Sized,
    {
        let word = word.to_uppercase();
        let letters = word.chars().collect::<Vec<_>>();
        let len = letters.len();
        if len == 0 || len > self.size {
            log::debug!("word {word:?} cannot fit a {0}x{0} grid", self.size);
            return Err(PlacementError {
                word,
                attempts_exhausted: 0,
            });
        }

        for attempt in 1..=max_attempts {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let (dr, dc) = direction.delta();
            let row = rng.random_range(start_range(dr, len, self.size));
            let col = rng.random_range(start_range(dc, len, self.size));
            let start = Position::new(row, col);

            let Some(coordinates) = self.fit(&letters, start, direction) else {
                log::trace!("attempt {attempt} for {word:?} at {start} {direction} conflicts");
                continue;
            };
            for (&pos, &letter) in coordinates.iter().zip(&letters) {
                self.cells[pos.row() * self.size + pos.col()] = Some(letter);
            }
            log::debug!("placed {word:?} at {start} {direction} after {attempt} attempt(s)");
            return Ok(PlacedWord { word, coordinates });
        }

        log::warn!("gave up placing {word:?} after {max_attempts} attempts");
        Err(PlacementError {
            word,
            attempts_exhausted: max_attempts,
        })
    }

    fn fit(&self, letters: &[char], start: Position, direction: Direction) -> Option<Vec<Position>> {
        letters
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                let pos = start.step(direction, i, self.size)?;
                match self.cell(pos) {
                    Some(existing) if existing != letter => None,
                    _ => Some(pos),
                }
            })
            .collect()
    }

    fn fill<R>(self, rng: &mut R) -> LetterGrid
    where
        R: Rng + ?Sized,
    {
        LetterGrid::from_fn(self.size, |pos| {
            self.cell(pos).unwrap_or_else(|| {
                char::from(FILLER_ALPHABET[rng.random_range(0..FILLER_ALPHABET.len())])
            })
        })
    }
}

/// Start indices along one axis for which `len` cells stepping by `step` stay
/// inside `0..size`. Requires `1 <= len <= size`.
fn start_range(step: isize, len: usize, size: usize) -> Range<usize> {
    match step {
        1 => 0..size - len + 1,
        -1 => len - 1..size,
        _ => 0..size,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{RngExt as _, SeedableRng as _};
    use rand_pcg::Pcg64;

    use super::*;

    fn rng(seed: u64) -> Pcg64 {
        Pcg64::seed_from_u64(seed)
    }

    /// Asserts every structural invariant of a generated puzzle.
    #[track_caller]
    fn assert_valid(words: &[&str], size: usize, grid: &LetterGrid, placements: &PlacementRecord) {
        assert_eq!(grid.size(), size);
        assert_eq!(grid.cells().len(), size * size);
        assert_eq!(placements.len(), words.len());
        for (placed, word) in placements.iter().zip(words) {
            assert_eq!(placed.word, word.to_uppercase());
            assert_eq!(placed.coordinates.len(), placed.word.chars().count());
            for (&pos, letter) in placed.coordinates.iter().zip(placed.word.chars()) {
                assert!(pos.is_within(size), "{pos} outside {size}x{size}");
                assert_eq!(grid[pos], letter, "cell {pos} of {:?}", placed.word);
            }
            let steps = placed
                .coordinates
                .windows(2)
                .map(|pair| {
                    let dr = pair[1].row().cast_signed() - pair[0].row().cast_signed();
                    let dc = pair[1].col().cast_signed() - pair[0].col().cast_signed();
                    Direction::from_delta(dr, dc).expect("illegal step")
                })
                .collect::<HashSet<_>>();
            assert!(steps.len() <= 1, "{:?} changes direction", placed.word);
        }
    }

    #[test]
    fn test_cat_in_three_by_three() {
        for seed in 0..50 {
            let (grid, placements) = generate_puzzle(&["CAT"], 3, &mut rng(seed)).unwrap();
            assert_valid(&["CAT"], 3, &grid, &placements);
            let cat = &placements[0];
            assert_eq!(grid.read_line(cat.start(), cat.end()).as_deref(), Some("CAT"));
            assert_eq!(grid.read_line(cat.end(), cat.start()).as_deref(), Some("TAC"));
            assert_eq!(
                cat.start().line_to(cat.end()).unwrap(),
                cat.coordinates
            );
        }
    }

    #[test]
    fn test_word_longer_than_grid_fails() {
        let err = generate_puzzle(&["SUPERCALIFRAGILISTIC"], 5, &mut rng(0)).unwrap_err();
        assert_eq!(
            err,
            PlacementError {
                word: "SUPERCALIFRAGILISTIC".to_owned(),
                attempts_exhausted: 0,
            }
        );
    }

    #[test]
    fn test_retry_budget_is_one_hundred() {
        assert_eq!(MAX_PLACEMENT_ATTEMPTS, 100);
        assert_eq!(PuzzleGenerator::default().max_attempts(), 100);
        assert_eq!(PuzzleGenerator::default().size(), 12);
    }

    #[test]
    fn test_unplaceable_word_exhausts_retry_budget() {
        // The only cell already holds 'A', so every attempt at "B" conflicts.
        let err = generate_puzzle(&["a", "b"], 1, &mut rng(3)).unwrap_err();
        assert_eq!(
            err,
            PlacementError {
                word: "B".to_owned(),
                attempts_exhausted: 100,
            }
        );
    }

    #[test]
    fn test_each_attempt_draws_direction_row_and_col() {
        fn advance(rng: &mut Pcg64, attempts: usize) {
            for _ in 0..attempts {
                let _ = rng.random_range(0..Direction::ALL.len());
                let _ = rng.random_range(0..1_usize);
                let _ = rng.random_range(0..1_usize);
            }
        }

        let mut board = Board::new(1).unwrap();
        board.place("A", 100, &mut rng(0)).unwrap();

        let mut actual = rng(3);
        let err = board.place("B", 100, &mut actual).unwrap_err();
        assert_eq!(err.attempts_exhausted, 100);

        // 100 attempts of three draws each, no more and no fewer.
        let mut expected = rng(3);
        advance(&mut expected, 100);
        let mut short = rng(3);
        advance(&mut short, 99);
        let next = actual.random::<u64>();
        assert_eq!(next, expected.random::<u64>());
        assert_ne!(next, short.random::<u64>());
    }

    #[test]
    fn test_generator_max_attempts() {
        let generator = PuzzleGenerator::new(1).with_max_attempts(7);
        assert_eq!(generator.max_attempts(), 7);
        let err = generator
            .generate_with_seed(&["a", "b"], PuzzleSeed::from_label("budget"))
            .unwrap_err();
        assert_eq!(err.word, "B");
        assert_eq!(err.attempts_exhausted, 7);
    }

    #[test]
    fn test_oversized_grid_fails_without_panicking() {
        let err = generate_puzzle(&["han"], usize::MAX, &mut rng(0)).unwrap_err();
        assert_eq!(err.word, "HAN");
        assert_eq!(err.attempts_exhausted, 0);
    }

    #[test]
    fn test_empty_word_fails() {
        let err = generate_puzzle(&["cat", ""], 4, &mut rng(0)).unwrap_err();
        assert_eq!(err.word, "");
        assert_eq!(err.attempts_exhausted, 0);
    }

    #[test]
    fn test_no_words_only_filler() {
        let (grid, placements) = generate_puzzle::<&str, _>(&[], 4, &mut rng(9)).unwrap();
        assert!(placements.is_empty());
        assert!(grid.cells().iter().all(char::is_ascii_uppercase));

        let (grid, _) = generate_puzzle::<&str, _>(&[], 0, &mut rng(9)).unwrap();
        assert_eq!(grid.size(), 0);
    }

    #[test]
    fn test_identical_words_may_overlap() {
        let words = ["AB", "AB", "AB"];
        let (grid, placements) = generate_puzzle(&words, 2, &mut rng(11)).unwrap();
        assert_valid(&words, 2, &grid, &placements);
    }

    #[test]
    fn test_full_grid_of_one_letter() {
        let words = ["ZZZ"; 6];
        let (grid, placements) = generate_puzzle(&words, 3, &mut rng(5)).unwrap();
        assert_valid(&words, 3, &grid, &placements);
    }

    #[test]
    fn test_all_directions_are_drawn() {
        let mut seen = HashSet::new();
        for seed in 0..200 {
            let (_, placements) = generate_puzzle(&["DROID"], 6, &mut rng(seed)).unwrap();
            seen.insert(placements[0].direction().unwrap());
        }
        assert_eq!(seen.len(), Direction::ALL.len());
    }

    #[test]
    fn test_start_range() {
        assert_eq!(start_range(1, 3, 5), 0..3);
        assert_eq!(start_range(-1, 3, 5), 2..5);
        assert_eq!(start_range(0, 3, 5), 0..5);
        assert_eq!(start_range(1, 5, 5), 0..1);
        assert_eq!(start_range(-1, 5, 5), 4..5);
    }

    #[test]
    fn test_generator_is_deterministic_per_seed() {
        let generator = PuzzleGenerator::default();
        let words = ["MAY", "THE", "FORCE", "BE", "WITH", "YOU"];
        let seed = PuzzleSeed::from_label("force");
        let a = generator.generate_with_seed(&words, seed).unwrap();
        let b = generator.generate_with_seed(&words, seed).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, seed);
        assert_valid(&words, DEFAULT_GRID_SIZE, &a.grid, &a.placements);
    }

    #[test]
    fn test_generate_uses_fresh_seeds() {
        let generator = PuzzleGenerator::new(6);
        let a = generator.generate(&["HAN"]).unwrap();
        let b = generator.generate(&["HAN"]).unwrap();
        assert_ne!(a.seed, b.seed);
    }

    proptest! {
        #[test]
        fn generated_puzzles_hold_invariants(
            seed in any::<u64>(),
            size in 5usize..10,
            words in prop::collection::vec("[a-zA-Z]{1,5}", 0..6),
        ) {
            let words = words.iter().map(String::as_str).collect::<Vec<_>>();
            match generate_puzzle(&words, size, &mut rng(seed)) {
                Ok((grid, placements)) => assert_valid(&words, size, &grid, &placements),
                Err(err) => {
                    prop_assert_eq!(err.attempts_exhausted, MAX_PLACEMENT_ATTEMPTS);
                    prop_assert!(words.iter().any(|w| w.to_uppercase() == err.word));
                }
            }
        }
    }
}
