//! Segment rule registry keyed by tag.

use std::collections::BTreeMap;

use crate::checks::SegmentRule;

/// Mapping from segment tag to the rule that validates it.
///
/// Built once and handed to the engine; lookups never mutate it. Tags without
/// an entry are passed through unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleRegistry {
    rules: BTreeMap<String, SegmentRule>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Registry with every built-in rule under its usual tag.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for rule in SegmentRule::all() {
            registry.insert(rule.tag(), *rule);
        }
        registry
    }

    /// Register `rule` for `tag`, returning the rule it replaced.
    pub fn insert(&mut self, tag: impl Into<String>, rule: SegmentRule) -> Option<SegmentRule> {
        self.rules.insert(tag.into(), rule)
    }

    /// Builder form of [`RuleRegistry::insert`].
    #[must_use]
    pub fn with_rule(mut self, tag: impl Into<String>, rule: SegmentRule) -> Self {
        self.insert(tag, rule);
        self
    }

    /// Get the rule for a tag. Matching is exact and case-sensitive.
    pub fn get(&self, tag: &str) -> Option<SegmentRule> {
        self.rules.get(tag).copied()
    }

    /// Check whether a tag has a rule.
    pub fn contains(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over `(tag, rule)` pairs sorted by tag.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SegmentRule)> {
        self.rules.iter().map(|(tag, rule)| (tag.as_str(), *rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registers_seven_tags() {
        let registry = RuleRegistry::standard();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.get("ISA"), Some(SegmentRule::InterchangeEnvelope));
        assert_eq!(registry.get("SV1"), Some(SegmentRule::ProfessionalService));
        let tags: Vec<&str> = registry.iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags, ["BHT", "CLM", "GS", "ISA", "NM1", "ST", "SV1"]);
    }

    #[test]
    fn unknown_and_lowercase_tags_are_absent() {
        let registry = RuleRegistry::standard();
        assert_eq!(registry.get("ZZZ"), None);
        assert_eq!(registry.get("isa"), None);
        assert!(!registry.contains("SE"));
    }

    #[test]
    fn insert_replaces_existing_rule() {
        let mut registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.insert("NM1", SegmentRule::Claim), None);
        assert_eq!(
            registry.insert("NM1", SegmentRule::EntityName),
            Some(SegmentRule::Claim)
        );
        assert_eq!(registry.len(), 1);
    }
}
