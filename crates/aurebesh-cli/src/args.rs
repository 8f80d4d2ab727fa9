use std::path::PathBuf;

use aurebesh_generator::{DEFAULT_GRID_SIZE, PuzzleSeed};
use aurebesh_script::LetterStyle;
use clap::{Args, Parser, Subcommand, ValueEnum, builder::RangedU64ValueParser};

/// Largest grid side length accepted by `word-search --size`.
pub const MAX_GRID_SIZE: u64 = 100;

/// Aurebesh translator and word-search puzzles.
#[derive(Debug, Parser)]
#[command(name = "aurebesh", author, version, about)]
pub struct Cli {
    /// Directory holding the history, saved phrases and unlocked tiers.
    #[arg(
        long,
        global = true,
        env = "AUREBESH_DATA_DIR",
        default_value = ".aurebesh",
        value_name = "DIR"
    )]
    pub data_dir: PathBuf,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Transliterate English text into Aurebesh.
    Encode(EncodeArgs),
    /// Transliterate Aurebesh text back into English.
    Decode(DecodeArgs),
    /// Generate, print or play a word-search puzzle.
    WordSearch(WordSearchArgs),
    /// Show or edit the translation history.
    #[command(subcommand)]
    History(HistoryCommand),
    /// Show or add saved phrases.
    #[command(subcommand)]
    Phrases(PhrasesCommand),
    /// Show flash-card tiers and their decks.
    #[command(subcommand)]
    Tiers(TiersCommand),
}

/// Arguments of `encode`.
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// How single letters are written.
    #[arg(long, value_enum, default_value_t)]
    pub letters: Letters,

    /// Append the translation to the history.
    #[arg(long)]
    pub record: bool,

    /// Text to transliterate. Several arguments are joined with spaces.
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

/// Arguments of `decode`.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Text to transliterate. Several arguments are joined with spaces.
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

/// Output letter style of `encode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Letters {
    /// Uppercase Latin letters, for use with an Aurebesh font.
    #[default]
    Latin,
    /// Private Use Area glyph codepoints.
    PrivateUse,
}

impl From<Letters> for LetterStyle {
    fn from(letters: Letters) -> Self {
        match letters {
            Letters::Latin => Self::Latin,
            Letters::PrivateUse => Self::PrivateUse,
        }
    }
}

/// Arguments of `word-search`.
#[derive(Debug, Args)]
pub struct WordSearchArgs {
    /// Grid side length.
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_GRID_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_GRID_SIZE)
    )]
    pub size: usize,

    /// Seed to reproduce a puzzle (64 hex digits).
    #[arg(long, value_name = "HEX", conflicts_with = "label")]
    pub seed: Option<PuzzleSeed>,

    /// Derive the seed from a text label, such as a date.
    #[arg(long, value_name = "TEXT")]
    pub label: Option<String>,

    /// Print the grid with script glyphs instead of Latin letters.
    #[arg(long)]
    pub glyphs: bool,

    /// Also print where each word was placed.
    #[arg(long, conflicts_with = "play")]
    pub solution: bool,

    /// Play the puzzle interactively on standard input.
    #[arg(long)]
    pub play: bool,

    /// Words to hide. Defaults to a well-known phrase.
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,
}

impl WordSearchArgs {
    /// Words used when none are given.
    pub const DEFAULT_WORDS: [&'static str; 6] = ["MAY", "THE", "FORCE", "BE", "WITH", "YOU"];

    /// Returns the seed selected by `--seed` or `--label`, if any.
    #[must_use]
    pub fn requested_seed(&self) -> Option<PuzzleSeed> {
        self.seed
            .or_else(|| self.label.as_deref().map(PuzzleSeed::from_label))
    }

    /// Returns the words to hide.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        if self.words.is_empty() {
            Self::DEFAULT_WORDS.map(str::to_owned).to_vec()
        } else {
            self.words.clone()
        }
    }
}

/// Subcommands of `history`.
#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List every entry, oldest first.
    List,
    /// Toggle the favorite mark of an entry. Favorites are also saved phrases.
    Favorite {
        /// Entry index as shown by `history list`.
        index: usize,
    },
    /// Remove an entry.
    Remove {
        /// Entry index as shown by `history list`.
        index: usize,
    },
    /// Remove every entry.
    Clear,
}

/// Subcommands of `phrases`.
#[derive(Debug, Subcommand)]
pub enum PhrasesCommand {
    /// List the preset phrases followed by the saved ones.
    List {
        /// Only list phrases saved by the user.
        #[arg(long)]
        saved: bool,
    },
    /// Save a phrase.
    Add {
        /// Phrase to save. Several arguments are joined with spaces.
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },
    /// Remove a saved phrase.
    Remove {
        /// Phrase to remove. Several arguments are joined with spaces.
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },
}

/// Subcommands of `tiers`.
#[derive(Debug, Subcommand)]
pub enum TiersCommand {
    /// List every tier and whether it is unlocked.
    List,
    /// Print the cards of a tier.
    Show {
        /// Tier number.
        tier: u8,
    },
    /// Unlock a tier.
    Unlock {
        /// Tier number.
        tier: u8,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_word_search_defaults() {
        let cli = Cli::try_parse_from(["aurebesh", "word-search"]).unwrap();
        let Command::WordSearch(args) = cli.command else {
            panic!("expected word-search");
        };
        assert_eq!(args.size, DEFAULT_GRID_SIZE);
        assert_eq!(args.words(), WordSearchArgs::DEFAULT_WORDS);
        assert_eq!(args.requested_seed(), None);
    }

    #[test]
    fn test_word_search_label_seed() {
        let cli = Cli::try_parse_from(["aurebesh", "word-search", "--label", "day one", "HAN"])
            .unwrap();
        let Command::WordSearch(args) = cli.command else {
            panic!("expected word-search");
        };
        assert_eq!(args.requested_seed(), Some(PuzzleSeed::from_label("day one")));
        assert_eq!(args.words(), ["HAN"]);
    }

    #[test]
    fn test_word_search_size_range() {
        let parse = |size: &str| Cli::try_parse_from(["aurebesh", "word-search", "--size", size]);
        assert!(parse("1").is_ok());
        assert!(parse("100").is_ok());
        assert!(parse("0").is_err());
        assert!(parse("101").is_err());
        assert!(parse("18446744073709551615").is_err());
    }

    #[test]
    fn test_seed_conflicts_with_label() {
        let seed = "00".repeat(32);
        let result = Cli::try_parse_from([
            "aurebesh",
            "word-search",
            "--seed",
            &seed,
            "--label",
            "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_letters() {
        let cli =
            Cli::try_parse_from(["aurebesh", "encode", "--letters", "private-use", "hi"]).unwrap();
        let Command::Encode(args) = cli.command else {
            panic!("expected encode");
        };
        assert_eq!(LetterStyle::from(args.letters), LetterStyle::PrivateUse);
        assert!(!args.record);
    }

    #[test]
    fn test_global_data_dir() {
        let cli =
            Cli::try_parse_from(["aurebesh", "history", "list", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/x"));
    }
}
