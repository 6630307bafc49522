//! The text analyzer: an original and an edited buffer plus the queries
//! that run over them.
//!
//! [`TextAnalyzer`] is the seam callers program against; [`TextManager`] is
//! the implementation backed by the functions in [`counting`](crate::counting),
//! [`search`](crate::search) and [`repeated`](crate::repeated). Test code
//! can substitute its own implementor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::counting;
use crate::error::AnalysisResult;
use crate::repeated;
use crate::reports::{TextSummary, WordMatch};
use crate::search;

/// A count an analyzer can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Measurement {
    /// Words in the original text.
    Words,
    /// Letters in the original text.
    Letters,
    /// Words in the edited text.
    EditedWords,
}

impl Measurement {
    /// Returns the measurement name in kebab-case.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Letters => "letters",
            Self::EditedWords => "edited-words",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives every count a [`TextManager`] computes.
pub trait CountObserver {
    /// Called once per computed count.
    fn observe(&self, measurement: Measurement, value: usize);
}

/// Observer that records counts as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CountObserver for TracingObserver {
    fn observe(&self, measurement: Measurement, value: usize) {
        tracing::debug!(measurement = measurement.as_str(), value, "count computed");
    }
}

/// Queries over an original and an edited text.
///
/// No method mutates either buffer. Searches only look at the original.
pub trait TextAnalyzer {
    /// Number of non-empty `' '`-separated segments in the original.
    fn count_words(&self) -> usize;

    /// Total characters of the non-empty `' '`-separated segments in the
    /// original.
    fn count_letters(&self) -> usize;

    /// Number of non-empty `' '`-separated segments in the edited text.
    fn count_words_edited(&self) -> usize;

    /// Character offsets of every (possibly overlapping) substring
    /// occurrence of `word`. See [`search::find_word`].
    fn find_word(&self, word: &str, ignore_case: bool) -> AnalysisResult<Vec<usize>>;

    /// Word tokens equal to `word`, case-insensitively.
    /// See [`search::find_exact_word`].
    fn find_exact_word(&self, word: &str, ignore_case: bool) -> AnalysisResult<Vec<WordMatch>>;

    /// Adjacent repeats whose text contains `word`.
    /// See [`repeated::find_repeats_of`].
    fn find_repeated_word(&self, word: &str, ignore_case: bool)
    -> AnalysisResult<Vec<WordMatch>>;

    /// Every adjacent repeat in the original.
    fn find_all_repeated_words(&self) -> Vec<WordMatch>;
}

/// Collect the three counts of an analyzer.
pub fn summarize<A: TextAnalyzer + ?Sized>(analyzer: &A) -> TextSummary {
    TextSummary {
        words: analyzer.count_words(),
        letters: analyzer.count_letters(),
        edited_words: analyzer.count_words_edited(),
    }
}

/// The default [`TextAnalyzer`], owning both text buffers.
///
/// # Example
///
/// ```
/// use wordscan_core::{TextAnalyzer, TextManager};
///
/// let mut manager = TextManager::new("the the cat");
/// manager.set_edited("the cat");
///
/// assert_eq!(manager.count_words(), 3);
/// assert_eq!(manager.count_words_edited(), 2);
/// assert_eq!(manager.find_all_repeated_words()[0].text, "the the");
/// ```
pub struct TextManager {
    original: String,
    edited: String,
    observer: Option<Box<dyn CountObserver>>,
}

impl TextManager {
    /// Create a manager whose original and edited texts both start as `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let original = text.into();
        Self {
            edited: original.clone(),
            original,
            observer: None,
        }
    }

    /// Attach an observer that is told about every computed count.
    #[must_use]
    pub fn with_observer(mut self, observer: impl CountObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The original text.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Replace the original text. The edited text is left alone.
    pub fn set_original(&mut self, text: impl Into<String>) {
        self.original = text.into();
    }

    /// The edited text.
    pub fn edited(&self) -> &str {
        &self.edited
    }

    /// Replace the edited text. The original text is left alone.
    pub fn set_edited(&mut self, text: impl Into<String>) {
        self.edited = text.into();
    }

    fn report(&self, measurement: Measurement, value: usize) -> usize {
        if let Some(observer) = &self.observer {
            observer.observe(measurement, value);
        }
        value
    }
}

impl fmt::Debug for TextManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextManager")
            .field("original", &self.original)
            .field("edited", &self.edited)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl TextAnalyzer for TextManager {
    fn count_words(&self) -> usize {
        self.report(Measurement::Words, counting::count_words(&self.original))
    }

    fn count_letters(&self) -> usize {
        self.report(Measurement::Letters, counting::count_letters(&self.original))
    }

    fn count_words_edited(&self) -> usize {
        self.report(Measurement::EditedWords, counting::count_words(&self.edited))
    }

    fn find_word(&self, word: &str, ignore_case: bool) -> AnalysisResult<Vec<usize>> {
        search::find_word(&self.original, word, ignore_case)
    }

    fn find_exact_word(&self, word: &str, ignore_case: bool) -> AnalysisResult<Vec<WordMatch>> {
        search::find_exact_word(&self.original, word, ignore_case)
    }

    fn find_repeated_word(
        &self,
        word: &str,
        ignore_case: bool,
    ) -> AnalysisResult<Vec<WordMatch>> {
        repeated::find_repeats_of(&self.original, word, ignore_case)
    }

    fn find_all_repeated_words(&self) -> Vec<WordMatch> {
        repeated::find_all_repeats(&self.original)
    }
}
