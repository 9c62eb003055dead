//! Individual or organizational name (NM1) checks.

use x12_model::Segment;

use super::require_elements;
use crate::issue::Issue;

/// Minimum NM1 element count.
pub const MIN_ELEMENTS: usize = 3;

/// Entity identifier codes accepted in NM101.
pub const ENTITY_IDENTIFIER_CODES: &[&str] = &[
    "40", // receiver
    "41", // submitter
    "77", // service facility
    "82", // rendering provider
    "85", // billing provider
    "87", // pay-to provider
    "DN", // referring provider
    "IL", // insured or subscriber
    "PR", // payer
    "QC", // patient
];

pub fn check(segment: &Segment) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(require_elements(segment, MIN_ELEMENTS));
    if let Some(code) = segment.element(0)
        && !ENTITY_IDENTIFIER_CODES.contains(&code)
    {
        issues.push(Issue::UnknownCode {
            field: "Entity identifier code",
            value: code.to_string(),
        });
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_pass() {
        for code in ENTITY_IDENTIFIER_CODES {
            let segment = Segment::from_elements("NM1", [*code, "2", "NAME"]);
            assert!(check(&segment).is_empty(), "code {code} rejected");
        }
    }

    #[test]
    fn unknown_code_message_includes_value() {
        let segment = Segment::from_elements("NM1", ["XX", "1", "DOE"]);
        let issues = check(&segment);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message(),
            "Entity identifier code 'XX' is not an allowed code"
        );
    }

    #[test]
    fn codes_are_case_sensitive() {
        let segment = Segment::from_elements("NM1", ["il", "1", "DOE"]);
        assert_eq!(check(&segment).len(), 1);
    }

    #[test]
    fn short_segment_reports_count_and_code() {
        let issues = check(&Segment::from_elements("NM1", ["ZZ"]));
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], Issue::TooFewElements { required: 3, found: 1 }));
    }
}
