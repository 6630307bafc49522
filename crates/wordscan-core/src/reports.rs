//! Result types returned by the analyzer and serialized by the CLI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::CharCursor;

/// A token-level match in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordMatch {
    /// Matched text as it appears in the original.
    pub text: String,
    /// Character offset of the first matched character.
    pub offset: usize,
    /// Length of the match in characters.
    pub length: usize,
    /// Byte offset where the match starts.
    pub byte_start: usize,
    /// Byte offset one past the end of the match.
    pub byte_end: usize,
}

impl WordMatch {
    /// Build a match for `source[byte_start..byte_end]`.
    pub(crate) fn from_span(
        source: &str,
        cursor: &mut CharCursor<'_>,
        byte_start: usize,
        byte_end: usize,
    ) -> Self {
        let text = &source[byte_start..byte_end];
        Self {
            text: text.to_string(),
            offset: cursor.char_offset(byte_start),
            length: text.chars().count(),
            byte_start,
            byte_end,
        }
    }
}

/// Word and letter counts for both buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextSummary {
    /// Words in the original text.
    pub words: usize,
    /// Letters in the original text (space separators excluded).
    pub letters: usize,
    /// Words in the edited text.
    pub edited_words: usize,
}

/// Offsets of a substring search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OccurrenceReport {
    /// The word that was searched for.
    pub word: String,
    /// Whether case was folded before searching.
    pub ignore_case: bool,
    /// Number of occurrences found.
    pub total: usize,
    /// Character offsets, ascending.
    pub offsets: Vec<usize>,
}

/// Token matches of an exact-word or repeated-word search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchReport {
    /// The filter word, if the search had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Number of matches found.
    pub total: usize,
    /// Matches in order of appearance.
    pub matches: Vec<WordMatch>,
}

impl MatchReport {
    /// Wrap a list of matches.
    pub fn new(word: Option<&str>, matches: Vec<WordMatch>) -> Self {
        Self {
            word: word.map(str::to_string),
            total: matches.len(),
            matches,
        }
    }
}
