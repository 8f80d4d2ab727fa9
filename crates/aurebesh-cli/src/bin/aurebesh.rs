//! Aurebesh command-line application.
//!
//! Set `RUST_LOG=debug` to see generator and store activity.

use std::{error::Error as _, io, process::ExitCode};

use aurebesh_cli::Cli;
use clap::Parser as _;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match aurebesh_cli::run(cli, input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
