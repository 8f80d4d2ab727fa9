//! Flash-card tiers and their unlock state.
//!
//! Tier 1 holds the single letters followed by the ligature digraphs, tier 2
//! the [`VOCABULARY`] list and tier 3 the [`PRESET_PHRASES`]. Tier 1 is
//! always unlocked.

use std::{collections::BTreeSet, path::Path};

use aurebesh_script::{LIGATURES, Ligature};
use serde::{Deserialize, Serialize};

use crate::{PRESET_PHRASES, StoreError, TierError, json_file};

/// The tier every learner starts with.
pub const FIRST_TIER: u8 = 1;

/// The highest defined tier.
pub const LAST_TIER: u8 = 3;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Tier 2 deck: vocabulary words and names.
pub const VOCABULARY: [&str; 100] = [
    "lightsaber",
    "blaster",
    "bowcaster",
    "thermal detonator",
    "ion cannon",
    "disruptor",
    "electrostaff",
    "force pike",
    "comlink",
    "datapad",
    "x-wing",
    "tie fighter",
    "millennium falcon",
    "star destroyer",
    "tie advanced",
    "snowspeeder",
    "podracer",
    "slave i",
    "speeder bike",
    "imperial shuttle",
    "luke",
    "leia",
    "han",
    "chewbacca",
    "yoda",
    "obi wan",
    "anakin",
    "vader",
    "palpatine",
    "lando",
    "wookiee",
    "ewok",
    "rodian",
    "twi'lek",
    "zabrak",
    "mon calamari",
    "duros",
    "bothan",
    "kashyyykian",
    "jawa",
    "tatooine",
    "coruscant",
    "naboo",
    "hoth",
    "endor",
    "kamino",
    "geonosis",
    "mustafar",
    "dagobah",
    "kashyyyk",
    "rebel alliance",
    "galactic empire",
    "first order",
    "resistance",
    "jedi order",
    "sith order",
    "bounty hunters",
    "clone troopers",
    "stormtroopers",
    "droids",
    "death star",
    "jabbas palace",
    "cloud city",
    "mos eisley",
    "mos espas",
    "jundland wastes",
    "ootini",
    "yavin 4",
    "theed palace",
    "hanging gardens",
    "hyperspace",
    "blue squadron",
    "gold squadron",
    "rogue squadron",
    "force sensitive",
    "holocron",
    "midichlorian",
    "lightspeed",
    "hyperdrive",
    "cantina",
    "padawan",
    "jedi master",
    "jedi knight",
    "sith lord",
    "grand moff",
    "moff",
    "admiral",
    "general",
    "commander",
    "captain",
    "u-wing",
    "a-wing",
    "b-wing",
    "tie interceptor",
    "tie bomber",
    "starfighter",
    "cr90 corvette",
    "venator class star destroyer",
    "mon cal amphibious cruiser",
    "droid control ship",
];

/// Returns `true` if a deck is defined for `tier`.
#[must_use]
pub fn is_defined(tier: u8) -> bool {
    (FIRST_TIER..=LAST_TIER).contains(&tier)
}

/// Returns the cards of a tier's deck.
///
/// # Errors
///
/// Returns [`TierError::UnknownTier`] if no deck is defined for `tier`.
///
/// # Examples
///
/// ```
/// use aurebesh_store::tiers;
///
/// let letters = tiers::deck(1)?;
/// assert_eq!(letters[..3], ["a", "b", "c"]);
/// assert!(letters.contains(&"th"));
/// assert!(tiers::deck(4).is_err());
/// # Ok::<(), aurebesh_store::TierError>(())
/// ```
pub fn deck(tier: u8) -> Result<Vec<&'static str>, TierError> {
    let cards = match tier {
        1 => (0..ALPHABET.len())
            .map(|i| &ALPHABET[i..=i])
            .chain(LIGATURES.iter().map(Ligature::digraph))
            .collect(),
        2 => VOCABULARY.to_vec(),
        3 => PRESET_PHRASES.to_vec(),
        _ => return Err(TierError::UnknownTier { tier }),
    };
    Ok(cards)
}

/// The set of unlocked tiers.
///
/// Persisted as `{"tiers": [1, 2]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnlockedTiers {
    tiers: BTreeSet<u8>,
}

impl Default for UnlockedTiers {
    fn default() -> Self {
        Self {
            tiers: BTreeSet::from([FIRST_TIER]),
        }
    }
}

impl UnlockedTiers {
    /// Creates a set with only the first tier unlocked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the set from `path`. A missing file gives the default set.
    ///
    /// Tiers without a deck are dropped and the first tier is always added.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let mut unlocked: Self = json_file::load_or_default(path)?;
        unlocked.tiers.retain(|&tier| is_defined(tier));
        unlocked.tiers.insert(FIRST_TIER);
        Ok(unlocked)
    }

    /// Saves the set to `path`, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        json_file::save(path, self)
    }

    /// Returns `true` if `tier` is unlocked.
    #[must_use]
    pub fn is_unlocked(&self, tier: u8) -> bool {
        self.tiers.contains(&tier)
    }

    /// Unlocks `tier`. Returns `true` if it was locked before.
    ///
    /// # Errors
    ///
    /// Returns [`TierError::UnknownTier`] if no deck is defined for `tier`.
    pub fn unlock(&mut self, tier: u8) -> Result<bool, TierError> {
        if !is_defined(tier) {
            return Err(TierError::UnknownTier { tier });
        }
        Ok(self.tiers.insert(tier))
    }

    /// Iterates over the unlocked tiers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> {
        self.tiers.iter().copied()
    }

    /// Returns the lowest defined tier that is still locked.
    #[must_use]
    pub fn next_locked(&self) -> Option<u8> {
        (FIRST_TIER..=LAST_TIER).find(|tier| !self.is_unlocked(*tier))
    }
}
