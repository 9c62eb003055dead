//! Aggregated validation results.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::rules::Category;

/// One rule failure scoped to a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Tag of the offending segment.
    pub tag: String,
    /// Human-readable message.
    pub message: String,
    /// Structural or semantic.
    pub category: Category,
}

impl Violation {
    pub fn new(tag: impl Into<String>, message: impl Into<String>, category: Category) -> Self {
        Self {
            tag: tag.into(),
            message: message.into(),
            category,
        }
    }
}

/// Result of validating one document.
///
/// Validity is always derived from the violation list, so the two can never
/// disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Segments produced by the tokenizer.
    pub segment_count: usize,
    /// Segments whose tag had no registered rule.
    pub skipped_count: usize,
    /// Violations in document order, then rule order within a segment.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// True when no violations were found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.violations.len()
    }

    pub fn count_by_category(&self, category: Category) -> usize {
        self.violations
            .iter()
            .filter(|violation| violation.category == category)
            .count()
    }

    /// Violations reported for segments with `tag`.
    pub fn violations_for<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.tag == tag)
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 4)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("segment_count", &self.segment_count)?;
        state.serialize_field("skipped_count", &self.skipped_count)?;
        state.serialize_field("violations", &self.violations)?;
        state.end()
    }
}
