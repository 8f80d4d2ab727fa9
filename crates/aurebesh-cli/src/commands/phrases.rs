use std::io::Write;

use aurebesh_store::DataDir;

use crate::{CliError, PhrasesCommand};

pub(super) fn run<W>(
    dir: &DataDir,
    command: &PhrasesCommand,
    output: &mut W,
) -> Result<(), CliError>
where
    W: Write,
{
    match command {
        PhrasesCommand::List { saved: only_saved } => {
            let saved = dir.load_saved_phrases()?;
            if *only_saved {
                for phrase in saved.iter() {
                    writeln!(output, "{phrase}")?;
                }
            } else {
                for phrase in saved.all_phrases() {
                    writeln!(output, "{phrase}")?;
                }
            }
        }
        PhrasesCommand::Add { text } => {
            let mut saved = dir.load_saved_phrases()?;
            let phrase = text.join(" ");
            if saved.add(&phrase) {
                dir.save_saved_phrases(&saved)?;
                writeln!(output, "Saved {:?}.", phrase.trim())?;
            } else {
                writeln!(output, "Nothing to save.")?;
            }
        }
        PhrasesCommand::Remove { text } => {
            let mut saved = dir.load_saved_phrases()?;
            let phrase = text.join(" ");
            if saved.remove(&phrase) {
                dir.save_saved_phrases(&saved)?;
                writeln!(output, "Removed {:?}.", phrase.trim())?;
            } else {
                writeln!(output, "{:?} is not saved.", phrase.trim())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use aurebesh_store::PRESET_PHRASES;

    use crate::commands::test_util::run_in;

    #[test]
    fn test_add_list_remove() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            run_in(&dir, &["phrases", "add", "Punch", "it"], "").unwrap(),
            "Saved \"Punch it\".\n"
        );
        assert_eq!(
            run_in(&dir, &["phrases", "add", "Punch it"], "").unwrap(),
            "Nothing to save.\n"
        );

        let all = run_in(&dir, &["phrases", "list"], "").unwrap();
        let lines = all.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), PRESET_PHRASES.len() + 1);
        assert_eq!(lines.last(), Some(&"Punch it"));

        assert_eq!(
            run_in(&dir, &["phrases", "remove", "Punch it"], "").unwrap(),
            "Removed \"Punch it\".\n"
        );
        assert_eq!(
            run_in(&dir, &["phrases", "remove", "Punch it"], "").unwrap(),
            "\"Punch it\" is not saved.\n"
        );
    }
}
