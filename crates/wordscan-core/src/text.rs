//! Text segmentation and case folding.
//!
//! Two tokenizations live here. Counting splits on the single space
//! character only; searching works on maximal runs of word characters
//! (Unicode `\w`). Neither applies language-aware word segmentation.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a maximal run of word characters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Split text on `' '` and drop the empty segments.
///
/// Tabs and newlines are not separators: `"a\tb"` is one segment.
pub fn space_segments(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|segment| !segment.is_empty())
}

/// Iterate over word tokens as `(byte_start, token)` pairs, in order.
pub fn word_tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| (m.start(), m.as_str()))
}

/// Fold a single character to lowercase.
///
/// Characters whose lowercase form expands to several characters (e.g.
/// `'İ'`) are kept as they are, so folding never changes the character
/// count of a string and offsets computed on folded text stay valid for
/// the original.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Fold every character of `text` with [`fold_char`].
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Compare two strings under [`fold_char`] without allocating.
pub fn eq_folded(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

/// Converts byte offsets into character offsets.
///
/// Offsets are expected in ascending order, which keeps a whole scan
/// linear. Going backwards restarts the count from the beginning.
#[derive(Debug)]
pub struct CharCursor<'t> {
    text: &'t str,
    byte: usize,
    chars: usize,
}

impl<'t> CharCursor<'t> {
    /// Start a cursor at the beginning of `text`.
    pub const fn new(text: &'t str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Character offset of the byte offset `byte`.
    ///
    /// `byte` must lie on a character boundary of the text.
    pub fn char_offset(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
