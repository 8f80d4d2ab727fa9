use std::io::Write;

use aurebesh_store::{DataDir, PhraseBook};

use crate::{CliError, HistoryCommand};

pub(super) fn run<W>(
    dir: &DataDir,
    command: &HistoryCommand,
    output: &mut W,
) -> Result<(), CliError>
where
    W: Write,
{
    match *command {
        HistoryCommand::List => {
            let history = dir.load_history()?;
            if history.is_empty() {
                writeln!(output, "No history yet.")?;
            }
            for (index, entry) in history.entries().iter().enumerate() {
                let mark = if entry.favorite { '*' } else { ' ' };
                writeln!(
                    output,
                    "{index:>3} {mark} {} -> {}",
                    entry.english, entry.aurebesh
                )?;
            }
        }
        HistoryCommand::Favorite { index } => {
            let mut book = PhraseBook::load(dir)?;
            let favorite = book
                .toggle_favorite(index)
                .ok_or(CliError::NoHistoryEntry { index })?;
            book.save(dir)?;
            let verb = if favorite { "Marked" } else { "Unmarked" };
            writeln!(output, "{verb} entry {index} as favorite.")?;
        }
        HistoryCommand::Remove { index } => {
            let mut history = dir.load_history()?;
            let entry = history
                .remove(index)
                .ok_or(CliError::NoHistoryEntry { index })?;
            dir.save_history(&history)?;
            writeln!(output, "Removed {:?}.", entry.english)?;
        }
        HistoryCommand::Clear => {
            let mut history = dir.load_history()?;
            let count = history.len();
            history.clear();
            dir.save_history(&history)?;
            writeln!(output, "Removed {count} entries.")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{CliError, commands::test_util::run_in};

    #[test]
    fn test_list_favorite_remove() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(run_in(&dir, &["history", "list"], "").unwrap(), "No history yet.\n");

        run_in(&dir, &["encode", "--record", "han"], "").unwrap();
        run_in(&dir, &["encode", "--record", "leia"], "").unwrap();
        run_in(&dir, &["history", "favorite", "1"], "").unwrap();
        assert_eq!(
            run_in(&dir, &["history", "list"], "").unwrap(),
            "  0   han -> HAN\n  1 * leia -> LEIA\n"
        );
        assert_eq!(
            run_in(&dir, &["phrases", "list", "--saved"], "").unwrap(),
            "leia\n"
        );

        run_in(&dir, &["history", "favorite", "1"], "").unwrap();
        assert_eq!(run_in(&dir, &["phrases", "list", "--saved"], "").unwrap(), "");

        assert_eq!(
            run_in(&dir, &["history", "remove", "0"], "").unwrap(),
            "Removed \"han\".\n"
        );
        assert_eq!(
            run_in(&dir, &["history", "list"], "").unwrap(),
            "  0   leia -> LEIA\n"
        );
        assert_eq!(
            run_in(&dir, &["history", "clear"], "").unwrap(),
            "Removed 1 entries.\n"
        );
    }

    #[test]
    fn test_history_with_iso8601_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("history.json"),
            r#"[{"english":"hi","aurebesh":"HI","favorite":false,"timestamp":"2025-09-01T12:00:00.000000"}]"#,
        )
        .unwrap();

        run_in(&dir, &["encode", "--record", "leia"], "").unwrap();
        run_in(&dir, &["history", "favorite", "0"], "").unwrap();
        assert_eq!(
            run_in(&dir, &["history", "list"], "").unwrap(),
            "  0 * hi -> HI\n  1   leia -> LEIA\n"
        );
    }

    #[test]
    fn test_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            run_in(&dir, &["history", "favorite", "3"], ""),
            Err(CliError::NoHistoryEntry { index: 3 })
        ));
        assert!(matches!(
            run_in(&dir, &["history", "remove", "0"], ""),
            Err(CliError::NoHistoryEntry { index: 0 })
        ));
    }
}
