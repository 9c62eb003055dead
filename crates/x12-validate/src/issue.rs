//! Segment issue types.
//!
//! The Issue enum provides type-safe issue creation where each variant
//! carries only its needed data. Messages never include the segment tag;
//! the engine attaches it when building a [`crate::Violation`].

use serde::Serialize;

use crate::rules::Category;

/// Problem found in a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Segment is shorter than its type requires
    TooFewElements { required: usize, found: usize },
    /// Element must hold one fixed value
    UnexpectedValue {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
    /// Element holds a code outside the allowed set
    UnknownCode { field: &'static str, value: String },
    /// Required element is blank
    MissingValue { field: &'static str },
    /// Element does not parse as a decimal number
    InvalidDecimal { field: &'static str, value: String },
}

impl Issue {
    /// Category for this issue type.
    pub fn category(&self) -> Category {
        match self {
            Issue::TooFewElements { .. } => Category::Structure,
            Issue::UnexpectedValue { .. }
            | Issue::UnknownCode { .. }
            | Issue::MissingValue { .. }
            | Issue::InvalidDecimal { .. } => Category::Semantic,
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::TooFewElements { required, found } => {
                format!("Segment must have at least {required} elements (found {found})")
            }
            Issue::UnexpectedValue {
                field,
                expected,
                found,
            } => format!("{field} must be '{expected}' (found '{found}')"),
            Issue::UnknownCode { field, value } => {
                format!("{field} '{value}' is not an allowed code")
            }
            Issue::MissingValue { field } => format!("{field} is required"),
            Issue::InvalidDecimal { field, value } => {
                format!("{field} '{value}' is not a valid decimal number")
            }
        }
    }
}
