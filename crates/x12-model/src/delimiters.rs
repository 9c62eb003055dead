//! Delimiter configuration for X12 documents.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default segment terminator.
pub const DEFAULT_SEGMENT_TERMINATOR: char = '~';

/// Default element separator.
pub const DEFAULT_ELEMENT_SEPARATOR: char = '*';

/// The pair of characters that structure an X12 document.
///
/// Delimiter characters inside data are not escaped; a literal separator in a
/// value shifts every following element of that segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delimiters {
    /// Ends each segment.
    pub segment_terminator: char,
    /// Separates elements within a segment.
    pub element_separator: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            segment_terminator: DEFAULT_SEGMENT_TERMINATOR,
            element_separator: DEFAULT_ELEMENT_SEPARATOR,
        }
    }
}

impl Delimiters {
    /// Build a delimiter pair, rejecting combinations that make tokenizing ambiguous.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DelimiterCollision`] when both characters are equal and
    /// [`ModelError::WhitespaceDelimiter`] when either one is whitespace (fragments are
    /// trimmed before splitting).
    pub fn new(segment_terminator: char, element_separator: char) -> Result<Self> {
        if segment_terminator.is_whitespace() {
            return Err(ModelError::WhitespaceDelimiter {
                role: "segment terminator",
                value: segment_terminator,
            });
        }
        if element_separator.is_whitespace() {
            return Err(ModelError::WhitespaceDelimiter {
                role: "element separator",
                value: element_separator,
            });
        }
        if segment_terminator == element_separator {
            return Err(ModelError::DelimiterCollision(segment_terminator));
        }
        Ok(Self {
            segment_terminator,
            element_separator,
        })
    }
}
