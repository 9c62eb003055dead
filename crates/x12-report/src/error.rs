//! Error types for report output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or writing a report.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    /// Failed to write the report file.
    #[error("failed to write report '{path}': {source}")]
    Write {
        /// File path that failed to write.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to a stream sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Create a write error with path context.
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Get a user-friendly suggestion for fixing this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Write { .. } | Self::Io(_) => {
                Some("Check that the output directory exists and is writable.")
            }
            Self::Json(_) => None,
        }
    }
}
