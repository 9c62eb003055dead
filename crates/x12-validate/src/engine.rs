//! Validation engine.
//!
//! Tokenizes a document, dispatches each segment to the rule registered for
//! its tag, and collects the resulting violations in document order. The
//! engine is total: malformed input only ever produces violations.

use x12_model::{Delimiters, Segment, Tokenizer};

use crate::issue::Issue;
use crate::report::{ValidationReport, Violation};
use crate::rules::RuleRegistry;

/// Engine that validates whole documents against a rule registry.
///
/// The registry is read-only after construction, so one engine can serve
/// concurrent callers; each call builds its own report.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    tokenizer: Tokenizer,
    registry: RuleRegistry,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Engine with the standard registry and default delimiters.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            registry: RuleRegistry::standard(),
        }
    }

    /// Use different delimiters.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.tokenizer = Tokenizer::new(delimiters);
        self
    }

    /// Replace the rule registry.
    #[must_use]
    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn delimiters(&self) -> Delimiters {
        self.tokenizer.delimiters()
    }

    /// Validate a full document.
    pub fn validate_document(&self, text: &str) -> ValidationReport {
        let mut report = ValidationReport::default();

        for segment in self.tokenizer.segments(text) {
            report.segment_count += 1;
            match self.validate_segment(&segment) {
                Some(violations) => report.violations.extend(violations),
                None => {
                    tracing::debug!(tag = %segment.tag(), "no rule registered, skipping segment");
                    report.skipped_count += 1;
                }
            }
        }

        tracing::debug!(
            segment_count = report.segment_count,
            skipped_count = report.skipped_count,
            violation_count = report.violations.len(),
            "document validated"
        );
        report
    }

    /// Validate one segment; `None` when its tag has no registered rule.
    pub fn validate_segment(&self, segment: &Segment) -> Option<Vec<Violation>> {
        let rule = self.registry.get(segment.tag())?;
        let issues = rule.check(segment);
        tracing::trace!(
            tag = %segment.tag(),
            rule = rule.name(),
            issue_count = issues.len(),
            "segment checked"
        );
        Some(
            issues
                .iter()
                .map(|issue| to_violation(segment.tag(), issue))
                .collect(),
        )
    }
}

fn to_violation(tag: &str, issue: &Issue) -> Violation {
    Violation::new(tag, issue.message(), issue.category())
}

/// Validate `text` with a default engine.
pub fn validate_document(text: &str) -> ValidationReport {
    ValidationEngine::new().validate_document(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::SegmentRule;
    use crate::rules::Category;

    #[test]
    fn empty_document_is_valid() {
        let report = validate_document("");
        assert!(report.is_valid());
        assert_eq!(report.segment_count, 0);
    }

    #[test]
    fn unregistered_tags_are_counted_as_skipped() {
        let report = validate_document("ZZZ~SE*4*0001~ST*837*0001~");
        assert!(report.is_valid());
        assert_eq!(report.segment_count, 3);
        assert_eq!(report.skipped_count, 2);
    }

    #[test]
    fn violations_are_tagged_by_the_engine() {
        let report = validate_document("CLM*A~");
        assert_eq!(
            report.violations,
            [Violation::new(
                "CLM",
                "Segment must have at least 5 elements (found 1)",
                Category::Structure,
            )]
        );
    }

    #[test]
    fn custom_registry_and_delimiters() {
        let engine = ValidationEngine::new()
            .with_delimiters(Delimiters::new('\'', '+').unwrap())
            .with_registry(RuleRegistry::new().with_rule("LX", SegmentRule::Claim));
        let report = engine.validate_document("LX+1'CLM'");
        assert_eq!(report.skipped_count, 1);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].tag, "LX");
        assert_eq!(engine.delimiters().element_separator, '+');
    }

    #[test]
    fn validate_segment_distinguishes_skip_from_pass() {
        let engine = ValidationEngine::new();
        assert_eq!(
            engine.validate_segment(&Segment::from_elements("ZZZ", ["1"])),
            None
        );
        assert_eq!(
            engine.validate_segment(&Segment::from_elements("ST", ["837", "0001"])),
            Some(Vec::new())
        );
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationEngine>();
    }
}
