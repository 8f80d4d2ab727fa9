//! Transliteration between the Latin alphabet and the Aurebesh script.
//!
//! Aurebesh writes each Latin letter as one glyph and additionally has eight
//! ligature glyphs for common digraphs such as `th` and `sh`. This crate
//! provides:
//!
//! - [`ligature`]: the digraph ligature table and its lookups.
//! - [`letter`]: Private Use codepoints for single letters.
//! - [`transliterate`]: the forward and reverse transforms, exposed as
//!   [`transliterate_forward`], [`transliterate_reverse`] and the configurable
//!   [`Transliterator`].
//!
//! Both transforms are pure, total functions. They fold case, so a round trip
//! reproduces the lowercased input rather than the original casing.
//!
//! # Examples
//!
//! ```
//! use aurebesh_script::{transliterate_forward, transliterate_reverse};
//!
//! let script = transliterate_forward("May the Force be with you");
//! assert_eq!(script, "MAY \u{E018}E FORCE BE WI\u{E018} YOU");
//! assert_eq!(transliterate_reverse(&script), "may the force be with you");
//! ```

pub mod letter;
pub mod ligature;
pub mod transliterate;

pub use self::{
    ligature::{LIGATURES, Ligature},
    transliterate::{LetterStyle, Transliterator, transliterate_forward, transliterate_reverse},
};

/// Returns `true` if `ch` is a ligature or letter glyph codepoint.
///
/// # Examples
///
/// ```
/// use aurebesh_script::is_script_glyph;
///
/// assert!(is_script_glyph('\u{E018}'));
/// assert!(is_script_glyph('\u{E000}'));
/// assert!(!is_script_glyph('A'));
/// ```
#[must_use]
pub fn is_script_glyph(ch: char) -> bool {
    ligature::digraph_for_glyph(ch).is_some() || letter::letter_for_glyph(ch).is_some()
}
