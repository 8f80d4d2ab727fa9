//! Latin ⇄ Aurebesh transliteration.

use std::iter;

use unicode_normalization::UnicodeNormalization as _;

use crate::{letter, ligature};

/// How single letters are written on the forward pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LetterStyle {
    /// Letters are written as uppercase Latin letters, which Aurebesh fonts
    /// draw as the matching glyph.
    #[default]
    Latin,
    /// Letters `A..=Z` are written as their Private Use glyph codepoints
    /// (see [`letter`]), and those glyphs are read back on the reverse pass.
    PrivateUse,
}

/// A configured transliterator.
///
/// [`Transliterator::default()`] behaves exactly like
/// [`transliterate_forward`] and [`transliterate_reverse`].
///
/// # Examples
///
/// ```
/// use aurebesh_script::{LetterStyle, Transliterator};
///
/// let latin = Transliterator::default();
/// assert_eq!(latin.forward("Shy"), "\u{E016}Y");
///
/// let glyphs = Transliterator::new(LetterStyle::PrivateUse);
/// let script = glyphs.forward("oak");
/// assert_eq!(script, "\u{E00E}\u{E000}\u{E00A}");
/// assert_eq!(glyphs.reverse(&script), "oak");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Transliterator {
    letters: LetterStyle,
}

impl Transliterator {
    /// Creates a transliterator with the given letter style.
    #[must_use]
    pub const fn new(letters: LetterStyle) -> Self {
        Self { letters }
    }

    /// Returns the letter style.
    #[must_use]
    pub const fn letter_style(&self) -> LetterStyle {
        self.letters
    }

    /// Transliterates Latin text into the script.
    ///
    /// The input is folded to lowercase, then scanned left to right. A pair of
    /// characters forming a ligature digraph becomes its glyph; any other
    /// character is written in uppercase (or as its letter glyph under
    /// [`LetterStyle::PrivateUse`]). The scan is greedy and never backtracks.
    #[must_use]
    pub fn forward(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let mut output = String::with_capacity(lowered.len());
        let mut chars = lowered.chars().peekable();
        while let Some(ch) = chars.next() {
            if let Some(glyph) = chars
                .peek()
                .and_then(|&next| ligature::glyph_for_pair(ch, next))
            {
                chars.next();
                output.push(glyph);
                continue;
            }
            let glyph = match self.letters {
                LetterStyle::Latin => None,
                LetterStyle::PrivateUse => letter::glyph_for_letter(ch),
            };
            match glyph {
                Some(glyph) => output.push(glyph),
                None => output.extend(ch.to_uppercase()),
            }
        }
        output
    }

    /// Transliterates script text back into lowercase Latin text.
    ///
    /// Each character is normalized to NFC; ligature glyphs become their
    /// digraph, and everything else is lowercased. One output chunk is written
    /// per input character, with no lookahead.
    #[must_use]
    pub fn reverse(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for ch in text.chars() {
            for normalized in iter::once(ch).nfc() {
                if let Some(digraph) = ligature::digraph_for_glyph(normalized) {
                    output.push_str(digraph);
                } else if self.letters == LetterStyle::PrivateUse
                    && let Some(letter) = letter::letter_for_glyph(normalized)
                {
                    output.push(letter);
                } else {
                    output.extend(normalized.to_lowercase());
                }
            }
        }
        output
    }
}

/// Transliterates Latin text into the script with uppercase Latin letters.
///
/// Total over all strings; case information is not preserved.
///
/// # Examples
///
/// ```
/// use aurebesh_script::transliterate_forward;
///
/// assert_eq!(transliterate_forward("the"), "\u{E018}E");
/// assert_eq!(transliterate_forward("Hello, world!"), "HELLO, WORLD!");
/// assert_eq!(transliterate_forward(""), "");
/// ```
#[must_use]
pub fn transliterate_forward(text: &str) -> String {
    Transliterator::default().forward(text)
}

/// Transliterates script text back into lowercase Latin text.
///
/// # Examples
///
/// ```
/// use aurebesh_script::{transliterate_forward, transliterate_reverse};
///
/// assert_eq!(transliterate_reverse(&transliterate_forward("Chew")), "chew");
/// assert_eq!(transliterate_reverse("\u{E013}AN"), "khan");
/// ```
#[must_use]
pub fn transliterate_reverse(text: &str) -> String {
    Transliterator::default().reverse(text)
}
