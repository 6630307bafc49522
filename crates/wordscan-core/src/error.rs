//! Error types for wordscan-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// A query argument was rejected before any scanning took place.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

impl AnalysisError {
    /// The search word was empty.
    pub(crate) const fn empty_word() -> Self {
        Self::InvalidArgument {
            name: "word",
            reason: "search word must not be empty",
        }
    }
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
