//! Syllable segmentation and stress detection.

/// Separates syllables in a respelling
pub const SYLLABLE_DELIMITER: char = '-';

/// U+02C8 MODIFIER LETTER VERTICAL LINE (712)
pub const PRIMARY_STRESS: char = '\u{02C8}';

/// U+02CC MODIFIER LETTER LOW VERTICAL LINE (716)
pub const SECONDARY_STRESS: char = '\u{02CC}';

/// Primary or secondary stress mark
pub fn is_stress(c: char) -> bool {
    c == PRIMARY_STRESS || c == SECONDARY_STRESS
}

/// One delimiter-bounded run of a transcription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable<'a> {
    pub text: &'a str,
}

impl Syllable<'_> {
    /// Stressed iff the first character is a stress mark; empty is unstressed.
    pub fn is_stressed(&self) -> bool {
        self.text.chars().next().map_or(false, is_stress)
    }
}

/// Split on the delimiter, keeping empty syllables.
pub fn segment(text: &str) -> Vec<Syllable<'_>> {
    text.split(SYLLABLE_DELIMITER)
        .map(|text| Syllable { text })
        .collect()
}

/// Rejoin syllables with the delimiter, in order.
pub fn join<S: AsRef<str>>(syllables: &[S]) -> String {
    let mut buf = [0u8; 4];
    let delimiter: &str = SYLLABLE_DELIMITER.encode_utf8(&mut buf);
    syllables
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(delimiter)
}
