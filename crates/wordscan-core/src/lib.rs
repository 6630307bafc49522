//! Core library for wordscan.
//!
//! Counts words and letters and searches for words in a pair of texts: an
//! original and an edited working copy. The interesting parts are the two
//! token-level searches, whole-word lookup and detection of immediately
//! repeated words ("the the").
//!
//! # Modules
//!
//! - [`analyzer`] - The [`TextAnalyzer`] trait and its [`TextManager`] implementation
//! - [`counting`] - Space-separated word and letter counts
//! - [`search`] - Substring and whole-word search
//! - [`repeated`] - Adjacent repeated-word detection
//! - [`text`] - Tokenization and case folding
//! - [`reports`] - Serializable result types
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordscan_core::{TextAnalyzer, TextManager};
//!
//! let manager = TextManager::new("Hello hello world world");
//!
//! assert_eq!(manager.count_words(), 4);
//! assert_eq!(manager.find_word("hello", true).unwrap(), vec![0, 6]);
//!
//! let repeats = manager.find_all_repeated_words();
//! assert_eq!(repeats.len(), 2);
//! assert_eq!(repeats[1].text, "world world");
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod counting;
pub mod error;
pub mod repeated;
pub mod reports;
pub mod search;
pub mod text;

pub use analyzer::{
    CountObserver, Measurement, TextAnalyzer, TextManager, TracingObserver, summarize,
};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use reports::{MatchReport, OccurrenceReport, TextSummary, WordMatch};

/// Default maximum input size in bytes (5 MiB).
///
/// Used by the CLI when no `max_input_bytes` is configured.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
