//! Word and letter counting over space-separated segments.

use crate::text::space_segments;

/// Count the non-empty `' '`-separated segments of `text`.
pub fn count_words(text: &str) -> usize {
    space_segments(text).count()
}

/// Sum the character lengths of the non-empty `' '`-separated segments.
///
/// Only the space separators are excluded; punctuation and other
/// whitespace count as letters.
pub fn count_letters(text: &str) -> usize {
    space_segments(text)
        .map(|segment| segment.chars().count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_simple_words() {
        assert_eq!(count_words("hello world test"), 3);
        assert_eq!(count_words("hello world test xunit unit net core"), 7);
    }

    #[test]
    fn extra_spaces_add_nothing() {
        assert_eq!(count_words("  hello    world  "), 2);
    }

    #[test]
    fn empty_and_blank_text() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("     "), 0);
        assert_eq!(count_letters(""), 0);
        assert_eq!(count_letters("   "), 0);
    }

    #[test]
    fn counts_letters_without_spaces() {
        assert_eq!(count_letters("hello world"), 10);
    }

    #[test]
    fn letters_include_punctuation() {
        assert_eq!(count_letters("hi, you!"), 7);
    }

    #[test]
    fn letters_count_characters_not_bytes() {
        assert_eq!(count_letters("café"), 4);
    }

    #[test]
    fn words_match_segment_count_for_any_spacing() {
        for text in ["a", " a", "a ", "a  b", "   a b  c   ", "x\ty z"] {
            let expected = text.split(' ').filter(|s| !s.is_empty()).count();
            assert_eq!(count_words(text), expected, "failed for {text:?}");
        }
    }
}
