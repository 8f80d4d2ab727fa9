//! The digraph ligature table.
//!
//! Eight lowercase digraphs are written as a single Aurebesh glyph. Glyphs live
//! in the Private Use Area block `U+E010..=U+E018`, where fonts for the script
//! place them. Both lookup directions are direct table indexes built at
//! compile time from [`LIGATURES`].

/// A digraph and the glyph that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ligature {
    digraph: &'static str,
    glyph: char,
}

impl Ligature {
    const fn new(digraph: &'static str, glyph: char) -> Self {
        Self { digraph, glyph }
    }

    /// Returns the two-letter lowercase digraph.
    #[must_use]
    pub const fn digraph(&self) -> &'static str {
        self.digraph
    }

    /// Returns the glyph codepoint.
    #[must_use]
    pub const fn glyph(&self) -> char {
        self.glyph
    }
}

/// Every ligature of the script.
///
/// The mapping is injective: no two digraphs share a glyph.
pub const LIGATURES: [Ligature; 8] = [
    Ligature::new("ch", '\u{E011}'),
    Ligature::new("sh", '\u{E016}'),
    Ligature::new("th", '\u{E018}'),
    Ligature::new("ae", '\u{E010}'),
    Ligature::new("eo", '\u{E012}'),
    Ligature::new("kh", '\u{E013}'),
    Ligature::new("oo", '\u{E015}'),
    Ligature::new("ng", '\u{E014}'),
];

const GLYPH_BASE: u32 = 0xE010;
const GLYPH_SPAN: usize = 9;

const BY_PAIR: [[Option<char>; 26]; 26] = {
    let mut table = [[None; 26]; 26];
    let mut i = 0;
    while i < LIGATURES.len() {
        let bytes = LIGATURES[i].digraph.as_bytes();
        table[(bytes[0] - b'a') as usize][(bytes[1] - b'a') as usize] = Some(LIGATURES[i].glyph);
        i += 1;
    }
    table
};

const BY_GLYPH: [Option<&str>; GLYPH_SPAN] = {
    let mut table = [None; GLYPH_SPAN];
    let mut i = 0;
    while i < LIGATURES.len() {
        let slot = (LIGATURES[i].glyph as u32 - GLYPH_BASE) as usize;
        assert!(table[slot].is_none(), "two digraphs share a glyph");
        table[slot] = Some(LIGATURES[i].digraph);
        i += 1;
    }
    table
};

/// Returns the glyph for the digraph `first` + `second`, if there is one.
///
/// Only lowercase ASCII pairs can match.
///
/// # Examples
///
/// ```
/// use aurebesh_script::ligature::glyph_for_pair;
///
/// assert_eq!(glyph_for_pair('t', 'h'), Some('\u{E018}'));
/// assert_eq!(glyph_for_pair('T', 'H'), None);
/// assert_eq!(glyph_for_pair('h', 't'), None);
/// ```
#[must_use]
pub fn glyph_for_pair(first: char, second: char) -> Option<char> {
    let row = alphabet_index(first)?;
    let col = alphabet_index(second)?;
    BY_PAIR[row][col]
}

/// Returns the glyph for a two-letter lowercase digraph.
///
/// # Examples
///
/// ```
/// use aurebesh_script::ligature::glyph_for_digraph;
///
/// assert_eq!(glyph_for_digraph("ng"), Some('\u{E014}'));
/// assert_eq!(glyph_for_digraph("n"), None);
/// assert_eq!(glyph_for_digraph("ngx"), None);
/// ```
#[must_use]
pub fn glyph_for_digraph(digraph: &str) -> Option<char> {
    let mut chars = digraph.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None) => glyph_for_pair(first, second),
        _ => None,
    }
}

/// Returns the lowercase digraph a glyph stands for.
///
/// # Examples
///
/// ```
/// use aurebesh_script::ligature::digraph_for_glyph;
///
/// assert_eq!(digraph_for_glyph('\u{E016}'), Some("sh"));
/// assert_eq!(digraph_for_glyph('\u{E017}'), None);
/// assert_eq!(digraph_for_glyph('s'), None);
/// ```
#[must_use]
pub fn digraph_for_glyph(glyph: char) -> Option<&'static str> {
    let slot = u32::from(glyph).checked_sub(GLYPH_BASE)?;
    BY_GLYPH.get(usize::try_from(slot).ok()?).copied().flatten()
}

fn alphabet_index(ch: char) -> Option<usize> {
    let byte = u8::try_from(ch).ok()?;
    byte.is_ascii_lowercase().then(|| usize::from(byte - b'a'))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_table_is_injective() {
        let glyphs = LIGATURES.iter().map(Ligature::glyph).collect::<HashSet<_>>();
        let digraphs = LIGATURES
            .iter()
            .map(Ligature::digraph)
            .collect::<HashSet<_>>();
        assert_eq!(glyphs.len(), LIGATURES.len());
        assert_eq!(digraphs.len(), LIGATURES.len());
    }

    #[test]
    fn test_lookups_agree_with_table() {
        for ligature in LIGATURES {
            assert_eq!(glyph_for_digraph(ligature.digraph()), Some(ligature.glyph()));
            assert_eq!(digraph_for_glyph(ligature.glyph()), Some(ligature.digraph()));
        }
    }

    #[test]
    fn test_reverse_index_is_total_over_glyph_block() {
        let mapped = (0xE010..=0xE018)
            .filter_map(char::from_u32)
            .filter(|&glyph| digraph_for_glyph(glyph).is_some())
            .count();
        assert_eq!(mapped, LIGATURES.len());
    }

    #[test]
    fn test_non_keys() {
        assert_eq!(glyph_for_pair('a', 'a'), None);
        assert_eq!(glyph_for_pair('é', 'h'), None);
        assert_eq!(glyph_for_pair(' ', 'h'), None);
        assert_eq!(digraph_for_glyph('\u{E00F}'), None);
        assert_eq!(digraph_for_glyph('\u{E019}'), None);
        assert_eq!(digraph_for_glyph(char::MAX), None);
    }
}
