//! Command-line front end for the Aurebesh toolkit.
//!
//! The `aurebesh` binary parses a [`Cli`] and hands it to [`run`], which
//! dispatches to the translator, the word-search generator and game, and the
//! persisted stores. Output goes to any [`std::io::Write`] so commands can be
//! driven from tests.
//!
//! # Examples
//!
//! ```
//! use clap::Parser as _;
//!
//! let cli = aurebesh_cli::Cli::try_parse_from(["aurebesh", "encode", "Hello", "there"])?;
//! let mut output = Vec::new();
//! aurebesh_cli::run(cli, std::io::empty(), &mut output)?;
//! assert_eq!(String::from_utf8(output)?, "HELLO \u{E018}ERE\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{args::*, commands::run, error::CliError};

mod args;
mod commands;
mod error;
