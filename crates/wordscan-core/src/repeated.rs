//! Adjacent repeated-word detection ("the the").
//!
//! A repeat is a word token, one or more whitespace characters, and the
//! same token again, compared case-insensitively. Matches never overlap:
//! once a pair is taken the scan resumes after its second token, so
//! `"go go go"` holds one repeat.
//!
//! The scan walks the token list once, so it stays linear on any input.

use crate::error::{AnalysisError, AnalysisResult};
use crate::reports::WordMatch;
use crate::text::{CharCursor, eq_folded, fold_case, word_tokens};

/// Find every adjacent repeat in `text`, in order of appearance.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn find_all_repeats(text: &str) -> Vec<WordMatch> {
    let tokens: Vec<(usize, &str)> = word_tokens(text).collect();
    let mut cursor = CharCursor::new(text);
    let mut repeats = Vec::new();

    let mut i = 0;
    while i + 1 < tokens.len() {
        let (first_start, first) = tokens[i];
        let (second_start, second) = tokens[i + 1];
        let gap = &text[first_start + first.len()..second_start];

        if is_whitespace_gap(gap) && eq_folded(first, second) {
            let end = second_start + second.len();
            repeats.push(WordMatch::from_span(text, &mut cursor, first_start, end));
            i += 2;
        } else {
            i += 1;
        }
    }

    tracing::debug!(count = repeats.len(), "adjacent repeats found");
    repeats
}

/// Find the adjacent repeats of `text` whose matched text contains `word`.
///
/// Containment is checked case-insensitively, so `"the"` also keeps
/// `"then then"`. Repeat detection itself is always case-insensitive;
/// `ignore_case` is accepted but does not change the result.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] when `word` is empty.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn find_repeats_of(
    text: &str,
    word: &str,
    ignore_case: bool,
) -> AnalysisResult<Vec<WordMatch>> {
    if word.is_empty() {
        return Err(AnalysisError::empty_word());
    }

    let needle = fold_case(word);
    let repeats = find_all_repeats(text)
        .into_iter()
        .filter(|m| fold_case(&m.text).contains(&needle))
        .collect();

    Ok(repeats)
}

/// Non-empty and made only of whitespace.
fn is_whitespace_gap(gap: &str) -> bool {
    !gap.is_empty() && gap.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(matches: &[WordMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn filtered_repeat_of_leading_word() {
        let matches = find_repeats_of("test test hello world world test", "test", true).unwrap();
        assert_eq!(texts(&matches), vec!["test test"]);
        assert_eq!(matches[0].offset, 0);
        assert_eq!(matches[0].length, 9);
    }

    #[test]
    fn filtered_repeats_across_text() {
        let matches = find_repeats_of("foo foo bar bar foo foo", "foo", true).unwrap();
        assert_eq!(texts(&matches), vec!["foo foo", "foo foo"]);
        assert_eq!(matches[1].offset, 16);
    }

    #[test]
    fn filtered_repeat_in_middle() {
        let matches = find_repeats_of("alpha beta beta gamma", "beta", true).unwrap();
        assert_eq!(texts(&matches), vec!["beta beta"]);
        assert_eq!(matches[0].offset, 6);
    }

    #[test]
    fn no_repeats_at_all() {
        assert!(find_repeats_of("one two three", "one", true).unwrap().is_empty());
    }

    #[test]
    fn repeat_detection_ignores_case_even_without_flag() {
        let matches = find_repeats_of("case CASE case", "case", false).unwrap();
        assert_eq!(texts(&matches), vec!["case CASE"]);
    }

    #[test]
    fn triple_word_yields_one_repeat() {
        let matches = find_repeats_of("repeat repeat repeat", "repeat", true).unwrap();
        assert_eq!(texts(&matches), vec!["repeat repeat"]);
    }

    #[test]
    fn four_in_a_row_yields_two_repeats() {
        let matches = find_all_repeats("go go go go");
        assert_eq!(texts(&matches), vec!["go go", "go go"]);
        assert_eq!(matches[1].offset, 6);
    }

    #[test]
    fn all_repeats_in_order() {
        let matches = find_all_repeats("foo foo bar bar baz");
        assert_eq!(texts(&matches), vec!["foo foo", "bar bar"]);
    }

    #[test]
    fn scan_resumes_after_each_pair() {
        let matches = find_all_repeats("foo foo bar bar foo foo");
        assert_eq!(texts(&matches), vec!["foo foo", "bar bar", "foo foo"]);
    }

    #[test]
    fn whitespace_of_any_kind_separates() {
        let matches = find_all_repeats("the\tthe and\n\n and");
        assert_eq!(texts(&matches), vec!["the\tthe", "and\n\n and"]);
    }

    #[test]
    fn punctuation_breaks_a_repeat() {
        assert!(find_all_repeats("yes, yes. no-no").is_empty());
    }

    #[test]
    fn prefix_is_not_a_repeat() {
        assert!(find_all_repeats("the then thence").is_empty());
        assert!(find_all_repeats("then the").is_empty());
    }

    #[test]
    fn filter_uses_containment() {
        let matches = find_repeats_of("then then now now", "the", true).unwrap();
        assert_eq!(texts(&matches), vec!["then then"]);
    }

    #[test]
    fn offsets_are_characters() {
        let matches = find_all_repeats("déjà vu vu");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].offset, 5);
        assert_eq!(matches[0].byte_start, 7);
    }

    #[test]
    fn filtered_matches_contain_the_word() {
        let text = "Big big dog DOG dog cat cat the The end";
        for word in ["big", "DOG", "at", "the", "e"] {
            for m in find_repeats_of(text, word, true).unwrap() {
                assert!(m.text.to_lowercase().contains(&word.to_lowercase()));
            }
        }
    }

    #[test]
    fn all_repeats_is_union_of_filtered_searches() {
        let text = "a a b c c c d d a a e";
        let all = find_all_repeats(text);

        let mut distinct: Vec<String> = all
            .iter()
            .filter_map(|m| m.text.split_whitespace().next())
            .map(str::to_lowercase)
            .collect();
        distinct.sort();
        distinct.dedup();

        let mut union: Vec<WordMatch> = distinct
            .iter()
            .flat_map(|token| {
                find_repeats_of(text, token, true)
                    .unwrap()
                    .into_iter()
                    .filter(move |m| m.text.split_whitespace().next() == Some(token.as_str()))
            })
            .collect();
        union.sort_by_key(|m| m.byte_start);

        assert_eq!(union, all);
    }

    #[test]
    fn empty_and_blank_text() {
        assert!(find_all_repeats("").is_empty());
        assert!(find_all_repeats(" \t\n ").is_empty());
        assert!(find_repeats_of("", "word", false).unwrap().is_empty());
    }

    #[test]
    fn rejects_empty_word() {
        assert!(find_repeats_of("a a", "", true).is_err());
    }
}
