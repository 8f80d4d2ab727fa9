use std::io::Write;

use aurebesh_store::{
    DataDir,
    tiers::{self, FIRST_TIER, LAST_TIER},
};

use crate::{CliError, TiersCommand};

pub(super) fn run<W>(
    dir: &DataDir,
    command: &TiersCommand,
    output: &mut W,
) -> Result<(), CliError>
where
    W: Write,
{
    match *command {
        TiersCommand::List => {
            let unlocked = dir.load_unlocked_tiers()?;
            for tier in FIRST_TIER..=LAST_TIER {
                let cards = tiers::deck(tier)?.len();
                let state = if unlocked.is_unlocked(tier) {
                    "unlocked"
                } else {
                    "locked"
                };
                writeln!(output, "Tier {tier}: {cards} cards ({state})")?;
            }
        }
        TiersCommand::Show { tier } => {
            for card in tiers::deck(tier)? {
                writeln!(output, "{card}")?;
            }
        }
        TiersCommand::Unlock { tier } => {
            let mut unlocked = dir.load_unlocked_tiers()?;
            if unlocked.unlock(tier)? {
                dir.save_unlocked_tiers(&unlocked)?;
                writeln!(output, "Unlocked tier {tier}.")?;
            } else {
                writeln!(output, "Tier {tier} is already unlocked.")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use aurebesh_store::{TierError, tiers::VOCABULARY};

    use crate::{CliError, commands::test_util::run_in};

    #[test]
    fn test_list_and_unlock() {
        let dir = tempfile::tempdir().unwrap();
        let expected = format!(
            "Tier 1: 34 cards (unlocked)\nTier 2: {} cards (locked)\nTier 3: 81 cards (locked)\n",
            VOCABULARY.len()
        );
        assert_eq!(run_in(&dir, &["tiers", "list"], "").unwrap(), expected);

        assert_eq!(
            run_in(&dir, &["tiers", "unlock", "2"], "").unwrap(),
            "Unlocked tier 2.\n"
        );
        assert_eq!(
            run_in(&dir, &["tiers", "unlock", "2"], "").unwrap(),
            "Tier 2 is already unlocked.\n"
        );
        assert!(
            run_in(&dir, &["tiers", "list"], "")
                .unwrap()
                .contains("Tier 2: 100 cards (unlocked)")
        );
    }

    #[test]
    fn test_show() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_in(&dir, &["tiers", "show", "1"], "").unwrap();
        assert!(output.starts_with("a\nb\nc\n"));
        assert!(output.lines().any(|card| card == "ng"));
    }

    #[test]
    fn test_unknown_tier() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            run_in(&dir, &["tiers", "unlock", "4"], ""),
            Err(CliError::Tier(TierError::UnknownTier { tier: 4 }))
        ));
        assert!(matches!(
            run_in(&dir, &["tiers", "show", "0"], ""),
            Err(CliError::Tier(TierError::UnknownTier { tier: 0 }))
        ));
    }
}
