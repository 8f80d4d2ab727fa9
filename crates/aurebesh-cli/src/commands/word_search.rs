use std::io::{self, BufRead, Write};

use aurebesh_core::{LetterGrid, Position};
use aurebesh_game::{SelectionOutcome, TapOutcome, WordSearchGame};
use aurebesh_generator::{GeneratedPuzzle, PuzzleGenerator};
use aurebesh_script::letter;
use log::info;

use crate::{CliError, WordSearchArgs};

pub(super) fn run<R, W>(args: &WordSearchArgs, input: R, output: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let generator = PuzzleGenerator::new(args.size);
    let words = args.words();
    let puzzle = match args.requested_seed() {
        Some(seed) => generator.generate_with_seed(&words, seed)?,
        None => generator.generate(&words)?,
    };
    info!("generated puzzle with seed {}", puzzle.seed);

    if args.play {
        play(WordSearchGame::new(puzzle), args.glyphs, input, output)
    } else {
        print_puzzle(&puzzle, args.glyphs, args.solution, output)?;
        Ok(())
    }
}

fn print_puzzle<W>(
    puzzle: &GeneratedPuzzle,
    glyphs: bool,
    solution: bool,
    output: &mut W,
) -> io::Result<()>
where
    W: Write,
{
    writeln!(output, "Seed: {}", puzzle.seed)?;
    writeln!(output)?;
    write_grid(&puzzle.grid, glyphs, output)?;
    writeln!(output)?;

    let words = puzzle
        .placements
        .iter()
        .map(|placed| placed.word.as_str())
        .collect::<Vec<_>>();
    writeln!(output, "Words: {}", words.join(" "))?;

    if solution {
        writeln!(output)?;
        writeln!(output, "Solution:")?;
        for placed in &puzzle.placements {
            let direction = placed
                .direction()
                .map_or_else(|| "single cell".to_owned(), |d| d.to_string());
            writeln!(
                output,
                "  {}: {} -> {} ({direction})",
                placed.word,
                placed.start(),
                placed.end()
            )?;
        }
    }
    Ok(())
}

/// Writes the grid with row and column numbers.
fn write_grid<W>(grid: &LetterGrid, glyphs: bool, output: &mut W) -> io::Result<()>
where
    W: Write,
{
    let width = grid.size().saturating_sub(1).to_string().len();

    write!(output, "{:width$}  ", "")?;
    for col in 0..grid.size() {
        write!(output, " {col:>width$}")?;
    }
    writeln!(output)?;

    for (row, cells) in grid.rows().enumerate() {
        write!(output, "{row:>width$} |")?;
        for &cell in cells {
            let cell = if glyphs {
                letter::glyph_for_letter(cell).unwrap_or(cell)
            } else {
                cell
            };
            write!(output, " {cell:>width$}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

fn play<R, W>(
    mut game: WordSearchGame,
    glyphs: bool,
    input: R,
    output: &mut W,
) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Seed: {}", game.puzzle().seed)?;
    writeln!(output)?;
    write_grid(game.grid(), glyphs, output)?;
    writeln!(output)?;
    writeln!(
        output,
        "Enter the first and last cell of a word as `row,col row,col`, or `q` to quit."
    )?;
    write_progress(&game, output)?;

    let mut lines = input.lines();
    while !game.is_complete() {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "q" | "quit") {
            break;
        }
        let Some(cells) = parse_cells(line) else {
            writeln!(output, "Expected one or two cells such as `0,0 0,4`.")?;
            continue;
        };

        for pos in cells {
            match game.tap(pos) {
                Ok(TapOutcome::Pending(_)) => {}
                Ok(TapOutcome::Resolved {
                    first,
                    last,
                    outcome,
                }) => report(&game, first, last, &outcome, output)?,
                Err(err) => {
                    game.clear_selection();
                    writeln!(output, "The {err}.")?;
                    break;
                }
            }
        }
        if let Some(first) = game.pending_tap() {
            writeln!(output, "Selected {first}. Enter the last cell.")?;
        }
    }

    let total = game.words().count();
    if game.is_complete() {
        writeln!(output, "All {total} words found!")?;
    } else {
        writeln!(output, "Found {}/{total} words.", game.found_count())?;
    }
    Ok(())
}

fn report<W>(
    game: &WordSearchGame,
    first: Position,
    last: Position,
    outcome: &SelectionOutcome,
    output: &mut W,
) -> io::Result<()>
where
    W: Write,
{
    match outcome {
        SelectionOutcome::Found(word) => {
            writeln!(output, "Found {word}!")?;
            if !game.is_complete() {
                write_progress(game, output)?;
            }
        }
        SelectionOutcome::AlreadyFound(word) => {
            writeln!(output, "{word} is already found.")?;
        }
        SelectionOutcome::Miss => match game.selection_letters(first, last) {
            Some(letters) => writeln!(output, "No word from {first} to {last} ({letters}).")?,
            None => writeln!(output, "{first} and {last} are not on one line.")?,
        },
    }
    Ok(())
}

fn write_progress<W>(game: &WordSearchGame, output: &mut W) -> io::Result<()>
where
    W: Write,
{
    let remaining = game
        .remaining_words()
        .map(|placed| placed.word.as_str())
        .collect::<Vec<_>>();
    writeln!(
        output,
        "Found {}/{}. Remaining: {}",
        game.found_count(),
        game.words().count(),
        remaining.join(", ")
    )
}

/// Parses one or two whitespace-separated `row,col` cells.
fn parse_cells(line: &str) -> Option<Vec<Position>> {
    let cells = line
        .split_whitespace()
        .map(parse_cell)
        .collect::<Option<Vec<_>>>()?;
    (1..=2).contains(&cells.len()).then_some(cells)
}

fn parse_cell(token: &str) -> Option<Position> {
    let (row, col) = token.split_once(',')?;
    Some(Position::new(row.parse().ok()?, col.parse().ok()?))
}
