//! Envelope checks: interchange (ISA), functional group (GS), transaction set (ST).

use x12_model::Segment;

use super::{expect_value, require_elements};
use crate::issue::Issue;

/// Minimum ISA element count.
pub const INTERCHANGE_MIN_ELEMENTS: usize = 16;
/// Element index holding the repetition separator.
pub const REPETITION_SEPARATOR_INDEX: usize = 11;
/// Required repetition separator token.
pub const REPETITION_SEPARATOR: &str = "^";

/// Minimum GS element count.
pub const FUNCTIONAL_GROUP_MIN_ELEMENTS: usize = 8;
/// Functional identifier code for health care claims.
pub const HEALTH_CARE_CLAIM_CODE: &str = "HC";

/// Minimum ST element count.
pub const TRANSACTION_SET_MIN_ELEMENTS: usize = 2;
/// Transaction set identifier for health care claims.
pub const CLAIM_TRANSACTION_CODE: &str = "837";

pub fn check_interchange(segment: &Segment) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(require_elements(segment, INTERCHANGE_MIN_ELEMENTS));
    issues.extend(expect_value(
        segment,
        REPETITION_SEPARATOR_INDEX,
        "Repetition separator",
        REPETITION_SEPARATOR,
    ));
    issues
}

pub fn check_functional_group(segment: &Segment) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(require_elements(segment, FUNCTIONAL_GROUP_MIN_ELEMENTS));
    issues.extend(expect_value(
        segment,
        0,
        "Functional identifier code",
        HEALTH_CARE_CLAIM_CODE,
    ));
    issues
}

pub fn check_transaction_set(segment: &Segment) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(require_elements(segment, TRANSACTION_SET_MIN_ELEMENTS));
    issues.extend(expect_value(
        segment,
        0,
        "Transaction set identifier code",
        CLAIM_TRANSACTION_CODE,
    ));
    issues
}
