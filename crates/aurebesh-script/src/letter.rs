//! Private Use glyphs for single letters.
//!
//! Some fonts place the 26 letter glyphs in the Private Use Area instead of
//! over the Latin letters. `A..=P` occupy `U+E000..=U+E00F`, `Q` sits at
//! `U+E017` and `R..=Z` at `U+E019..=U+E021`, interleaved with the ligature
//! block.

const FIRST_BLOCK: u32 = 0xE000;
const Q_GLYPH: u32 = 0xE017;
const LAST_BLOCK: u32 = 0xE019;

/// Returns the glyph for an ASCII letter of either case.
///
/// # Examples
///
/// ```
/// use aurebesh_script::letter::glyph_for_letter;
///
/// assert_eq!(glyph_for_letter('A'), Some('\u{E000}'));
/// assert_eq!(glyph_for_letter('q'), Some('\u{E017}'));
/// assert_eq!(glyph_for_letter('Z'), Some('\u{E021}'));
/// assert_eq!(glyph_for_letter('1'), None);
/// ```
#[must_use]
pub fn glyph_for_letter(letter: char) -> Option<char> {
    let upper = letter.to_ascii_uppercase();
    let code = match upper {
        'A'..='P' => FIRST_BLOCK + (u32::from(upper) - u32::from('A')),
        'Q' => Q_GLYPH,
        'R'..='Z' => LAST_BLOCK + (u32::from(upper) - u32::from('R')),
        _ => return None,
    };
    char::from_u32(code)
}

/// Returns the lowercase ASCII letter a glyph stands for.
///
/// # Examples
///
/// ```
/// use aurebesh_script::letter::letter_for_glyph;
///
/// assert_eq!(letter_for_glyph('\u{E00F}'), Some('p'));
/// assert_eq!(letter_for_glyph('\u{E018}'), None); // "th" ligature
/// ```
#[must_use]
pub fn letter_for_glyph(glyph: char) -> Option<char> {
    let code = u32::from(glyph);
    let offset = match code {
        0xE000..=0xE00F => code - FIRST_BLOCK,
        Q_GLYPH => u32::from(b'q' - b'a'),
        0xE019..=0xE021 => code - LAST_BLOCK + u32::from(b'r' - b'a'),
        _ => return None,
    };
    char::from_u32(u32::from('a') + offset)
}
