//! Segment rules.
//!
//! Each supported segment type has one fixed rule set. The set of rules is
//! closed: [`SegmentRule`] enumerates every variant and dispatches with a
//! plain `match`, so adding a segment type means adding a variant here.

mod claim;
mod envelope;
mod header;
mod name;

use serde::{Deserialize, Serialize};
use x12_model::Segment;

use crate::issue::Issue;

pub use claim::parse_decimal;
pub use name::ENTITY_IDENTIFIER_CODES;

/// Validation strategy for one segment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentRule {
    /// ISA interchange control header
    InterchangeEnvelope,
    /// GS functional group header
    FunctionalGroup,
    /// ST transaction set header
    TransactionSet,
    /// BHT beginning of hierarchical transaction
    HierarchicalTransaction,
    /// NM1 individual or organizational name
    EntityName,
    /// CLM claim information
    Claim,
    /// SV1 professional service
    ProfessionalService,
}

impl SegmentRule {
    /// Every rule variant, in envelope-to-detail order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::InterchangeEnvelope,
            Self::FunctionalGroup,
            Self::TransactionSet,
            Self::HierarchicalTransaction,
            Self::EntityName,
            Self::Claim,
            Self::ProfessionalService,
        ]
    }

    /// Segment tag this rule is normally registered for.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::InterchangeEnvelope => "ISA",
            Self::FunctionalGroup => "GS",
            Self::TransactionSet => "ST",
            Self::HierarchicalTransaction => "BHT",
            Self::EntityName => "NM1",
            Self::Claim => "CLM",
            Self::ProfessionalService => "SV1",
        }
    }

    /// Human-readable rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InterchangeEnvelope => "Interchange Control Header",
            Self::FunctionalGroup => "Functional Group Header",
            Self::TransactionSet => "Transaction Set Header",
            Self::HierarchicalTransaction => "Beginning of Hierarchical Transaction",
            Self::EntityName => "Individual or Organizational Name",
            Self::Claim => "Claim Information",
            Self::ProfessionalService => "Professional Service",
        }
    }

    /// Run this rule against a segment.
    pub fn check(&self, segment: &Segment) -> Vec<Issue> {
        match self {
            Self::InterchangeEnvelope => envelope::check_interchange(segment),
            Self::FunctionalGroup => envelope::check_functional_group(segment),
            Self::TransactionSet => envelope::check_transaction_set(segment),
            Self::HierarchicalTransaction => header::check(segment),
            Self::EntityName => name::check(segment),
            Self::Claim => claim::check_claim(segment),
            Self::ProfessionalService => claim::check_professional_service(segment),
        }
    }

    /// Violation messages for a segment, without the tag prefix.
    pub fn validate(&self, segment: &Segment) -> Vec<String> {
        self.check(segment).iter().map(Issue::message).collect()
    }
}

/// Issue for a segment shorter than `required` elements.
fn require_elements(segment: &Segment, required: usize) -> Option<Issue> {
    let found = segment.element_count();
    (found < required).then_some(Issue::TooFewElements { required, found })
}

/// Issue when a present element differs from its fixed value.
fn expect_value(
    segment: &Segment,
    index: usize,
    field: &'static str,
    expected: &'static str,
) -> Option<Issue> {
    let found = segment.element(index)?;
    (found != expected).then(|| Issue::UnexpectedValue {
        field,
        expected,
        found: found.to_string(),
    })
}
