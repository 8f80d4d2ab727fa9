use std::{
    io::{BufRead, Write},
    time::{SystemTime, UNIX_EPOCH},
};

use aurebesh_store::DataDir;

use crate::{Cli, CliError, Command};

mod history;
mod phrases;
mod tiers;
mod translate;
mod word_search;

/// Runs a parsed command line.
///
/// Results are written to `output`. Interactive commands read from `input`.
///
/// # Errors
///
/// Returns [`CliError`] if the command fails.
pub fn run<R, W>(cli: Cli, input: R, output: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let dir = DataDir::new(cli.data_dir);
    log::debug!("data directory: {}", dir.root().display());

    match cli.command {
        Command::Encode(args) => translate::encode(&dir, &args, output),
        Command::Decode(args) => translate::decode(&args, output),
        Command::WordSearch(args) => word_search::run(&args, input, output),
        Command::History(command) => history::run(&dir, &command, output),
        Command::Phrases(command) => phrases::run(&dir, &command, output),
        Command::Tiers(command) => tiers::run(&dir, &command, output),
    }
}

fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
