use std::io::Write;

use aurebesh_script::{LetterStyle, Transliterator};
use aurebesh_store::DataDir;
use log::info;

use crate::{CliError, DecodeArgs, EncodeArgs};

pub(super) fn encode<W>(dir: &DataDir, args: &EncodeArgs, output: &mut W) -> Result<(), CliError>
where
    W: Write,
{
    let text = args.text.join(" ");
    let script = Transliterator::new(args.letters.into()).forward(&text);
    writeln!(output, "{script}")?;

    if args.record {
        let mut history = dir.load_history()?;
        if history.record(&text, &script, super::unix_time()) {
            dir.save_history(&history)?;
            info!("recorded history entry {}", history.len() - 1);
        } else {
            info!("history entry skipped");
        }
    }
    Ok(())
}

pub(super) fn decode<W>(args: &DecodeArgs, output: &mut W) -> Result<(), CliError>
where
    W: Write,
{
    // Letter glyphs are read back too, so output of either encode style decodes.
    let text = Transliterator::new(LetterStyle::PrivateUse).reverse(&args.text.join(" "));
    writeln!(output, "{text}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use aurebesh_store::{DataDir, HistoryLog};

    use crate::commands::test_util::run_in;

    #[test]
    fn test_encode() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_in(&dir, &["encode", "May", "the", "Force"], "").unwrap();
        assert_eq!(output, "MAY \u{E018}E FORCE\n");
        assert!(!DataDir::new(dir.path()).history_path().exists());
    }

    #[test]
    fn test_encode_private_use() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_in(&dir, &["encode", "--letters", "private-use", "ash"], "").unwrap();
        assert_eq!(output, "\u{E000}\u{E016}\n");
    }

    #[test]
    fn test_encode_record() {
        let dir = tempfile::tempdir().unwrap();
        run_in(&dir, &["encode", "--record", "chewie"], "").unwrap();
        run_in(&dir, &["encode", "--record", "chewie"], "").unwrap();
        let history = HistoryLog::load(&DataDir::new(dir.path()).history_path()).unwrap();
        assert_eq!(history.len(), 1);
        let entry = history.get(0).unwrap();
        assert_eq!(entry.english, "chewie");
        assert_eq!(entry.aurebesh, "\u{E011}EWIE");
    }

    #[test]
    fn test_decode_either_style() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_in(&dir, &["decode", "\u{E018}E", "FORCE"], "").unwrap();
        assert_eq!(output, "the force\n");
        let output = run_in(&dir, &["decode", "\u{E000}\u{E016}"], "").unwrap();
        assert_eq!(output, "ash\n");
    }
}
