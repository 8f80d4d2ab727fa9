use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{StoreError, json_file};

/// Built-in phrases, listed before the user's saved phrases.
pub const PRESET_PHRASES: [&str; 81] = [
    "May the Force be with you",
    "I have a bad feeling about this",
    "Do. Or do not. There is no try.",
    "This is the way",
    "Use the Force, Luke.",
    "Help me, Obi-Wan Kenobi. You’re my only hope.",
    "These aren’t the droids you’re looking for.",
    "I find your lack of faith disturbing.",
    "The Force will be with you. Always.",
    "Never tell me the odds!",
    "It’s a trap!",
    "In my experience, there's no such thing as luck.",
    "Stay on target.",
    "I am your father.",
    "I will not be the last Jedi.",
    "Rebellions are built on hope.",
    "I am one with the Force. The Force is with me.",
    "I feel the good in you, the conflict.",
    "Your eyes can deceive you; don’t trust them.",
    "The circle is now complete.",
    "Remember, the Force will be with you, always.",
    "Now this is podracing!",
    "You were the chosen one!",
    "I have the highground",
    "You’ve taken your first step into a larger world.",
    "Only a Sith deals in absolutes.",
    "Power! Unlimited power!",
    "I’m altering the deal. Pray I don’t alter it any further.",
    "Why, you stuck-up, half-witted, scruffy-looking nerf herder!",
    "I suggest a new strategy, R2. Let the Wookiee win.",
    "Truly wonderful, the mind of a child is.",
    "I am a Jedi, like my father before me.",
    "You don’t know the power of the dark side!",
    "Chewie, we’re home.",
    "I’ll never turn to the dark side.",
    "I’ve been waiting for you, Obi-Wan.",
    "I’ve got a bad feeling about this.",
    "I want to go home and rethink my life.",
    "That’s no moon. It’s a space station.",
    "You don’t believe in the Force, do you?",
    "Mind tricks don’t work on me.",
    "I’m just a simple man trying to make my way in the universe.",
    "Fear leads to anger. Anger leads to hate. Hate leads to suffering.",
    "We take them together.",
    "Light the fire.",
    "It’s not about lifting rocks.",
    "You know, sometimes I amaze even myself.",
    "This deal is getting worse all the time.",
    "It’s like poetry, it rhymes.",
    "The Force is strong with this one.",
    "Let the Wookiee win.",
    "Don’t get cocky.",
    "Somebody has to save our skins.",
    "Clearly the kid is the brains of the operation.",
    "Understanding you does not mean I agree with you.",
    "Oh, I'm confident, I'm just not stupid.",
    "Good soldiers follow orders.",
    "This Is on You Now. This Is Like Skin.",
    "You've Become More Than Your Fear.",
    "That Ends Today! There Is One Way Out.",
    "The Empire Is a Disease That Thrives in Darkness.",
    "We're the Rhydo, Kid. We're the Fuel.",
    "Remember This: Try.",
    "The Death of Truth Is the Ultimate Victory of Evil.",
    "I Burn My Life to Make a Sunrise That I Know I'll Never See.",
    "Tyranny requires constant effort.",
    "So this is how liberty dies. With Thunderous applause.",
    "Your focus determines your reality.",
    "There's always a bigger fish.",
    "Fear is the path to the dark side.",
    "Luminous beings are we, not this crude matter.",
    "The greatest teacher, failure is.",
    "We are what they grow beyond.",
    "Adventure. Excitement. A jedi craves not these things.",
    "You must unlearn what you have learned.",
    "To defeat an enemy, you must know them.",
    "Be careful not to choke on your aspirations.",
    "This will be a day long remembered.",
    "The Force, the Jedi. All of it. It's all true.",
    "I am no Jedi, but I know the Force.",
    "An elegant weapon for a more civilized age.",
];

/// Phrases saved by the user, in the order they were added.
///
/// Persisted as a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedPhrases {
    phrases: Vec<String>,
}

impl SavedPhrases {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the list from `path`. A missing file gives an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        json_file::load_or_default(path)
    }

    /// Saves the list to `path`, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        json_file::save(path, self)
    }

    /// Adds a phrase, trimmed of surrounding whitespace.
    ///
    /// Blank phrases and phrases already saved are ignored. Returns `true`
    /// if the phrase was added.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurebesh_store::SavedPhrases;
    ///
    /// let mut saved = SavedPhrases::new();
    /// assert!(saved.add("  Punch it, Chewie!  "));
    /// assert!(!saved.add("Punch it, Chewie!"));
    /// assert!(!saved.add(""));
    /// assert_eq!(saved.iter().collect::<Vec<_>>(), ["Punch it, Chewie!"]);
    /// ```
    pub fn add(&mut self, phrase: &str) -> bool {
        let phrase = phrase.trim();
        if phrase.is_empty() || self.contains(phrase) {
            return false;
        }
        self.phrases.push(phrase.to_owned());
        true
    }

    /// Removes a phrase. Returns `true` if it was saved.
    pub fn remove(&mut self, phrase: &str) -> bool {
        let phrase = phrase.trim();
        let len = self.phrases.len();
        self.phrases.retain(|saved| saved != phrase);
        self.phrases.len() != len
    }

    /// Returns `true` if the phrase is saved.
    #[must_use]
    pub fn contains(&self, phrase: &str) -> bool {
        let phrase = phrase.trim();
        self.phrases.iter().any(|saved| saved == phrase)
    }

    /// Returns the number of saved phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns `true` if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Iterates over the saved phrases.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Iterates over the preset phrases followed by the saved ones.
    pub fn all_phrases(&self) -> impl Iterator<Item = &str> {
        PRESET_PHRASES.into_iter().chain(self.iter())
    }
}
