//! Error types for the X12 model crate.

use thiserror::Error;

/// Errors raised while configuring the tokenizer.
///
/// Tokenizing itself never fails; only delimiter configuration can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Segment terminator and element separator are the same character.
    #[error("segment terminator and element separator must differ (both are '{0}')")]
    DelimiterCollision(char),

    /// A whitespace character was supplied as a delimiter.
    #[error("{role} cannot be a whitespace character ({value:?})")]
    WhitespaceDelimiter {
        /// Which delimiter was rejected.
        role: &'static str,
        /// The offending character.
        value: char,
    },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
