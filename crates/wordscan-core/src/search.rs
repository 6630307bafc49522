//! Word search: overlapping substring search and whole-token search.

use std::borrow::Cow;

use crate::error::{AnalysisError, AnalysisResult};
use crate::reports::WordMatch;
use crate::text::{CharCursor, eq_folded, fold_case, word_tokens};

/// Find every character offset where `word` occurs in `text`.
///
/// This is a plain substring search that ignores word boundaries and
/// reports overlapping hits: after each hit the scan moves forward by one
/// character, so `"aa"` is found twice in `"aaa"`. With `ignore_case`, both
/// sides are folded with [`fold_case`](crate::text::fold_case) first.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] when `word` is empty.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn find_word(text: &str, word: &str, ignore_case: bool) -> AnalysisResult<Vec<usize>> {
    if word.is_empty() {
        return Err(AnalysisError::empty_word());
    }

    let (haystack, needle): (Cow<'_, str>, Cow<'_, str>) = if ignore_case {
        (Cow::Owned(fold_case(text)), Cow::Owned(fold_case(word)))
    } else {
        (Cow::Borrowed(text), Cow::Borrowed(word))
    };

    let mut cursor = CharCursor::new(&haystack);
    let mut offsets = Vec::new();
    let mut from = 0;
    while let Some(found) = haystack[from..].find(needle.as_ref()) {
        let at = from + found;
        offsets.push(cursor.char_offset(at));
        // Step over one character, not the whole needle.
        from = at + haystack[at..].chars().next().map_or(1, char::len_utf8);
    }

    Ok(offsets)
}

/// Find every word token of `text` equal to `word`.
///
/// Tokens are maximal runs of word characters. Comparison is always
/// case-insensitive: `ignore_case` is accepted for API symmetry with
/// [`find_word`] but does not change the result.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] when `word` is empty.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn find_exact_word(
    text: &str,
    word: &str,
    ignore_case: bool,
) -> AnalysisResult<Vec<WordMatch>> {
    if word.is_empty() {
        return Err(AnalysisError::empty_word());
    }

    let mut cursor = CharCursor::new(text);
    let matches = word_tokens(text)
        .filter(|(_, token)| eq_folded(token, word))
        .map(|(start, token)| WordMatch::from_span(text, &mut cursor, start, start + token.len()))
        .collect();

    Ok(matches)
}
