//! Claim (CLM) and professional service (SV1) checks.

use x12_model::Segment;

use super::require_elements;
use crate::issue::Issue;

/// Minimum CLM element count.
pub const CLAIM_MIN_ELEMENTS: usize = 5;

/// Minimum SV1 element count.
pub const SERVICE_MIN_ELEMENTS: usize = 3;

pub fn check_claim(segment: &Segment) -> Vec<Issue> {
    require_elements(segment, CLAIM_MIN_ELEMENTS)
        .into_iter()
        .collect()
}

pub fn check_professional_service(segment: &Segment) -> Vec<Issue> {
    // Later checks index elements 0 and 1; stop before reading past the end.
    if let Some(issue) = require_elements(segment, SERVICE_MIN_ELEMENTS) {
        return vec![issue];
    }

    let mut issues = Vec::new();
    let procedure = segment.element(0).unwrap_or_default();
    if procedure.trim().is_empty() {
        issues.push(Issue::MissingValue {
            field: "Procedure code",
        });
    }

    let charge = segment.element(1).unwrap_or_default();
    if parse_decimal(charge).is_none() {
        issues.push(Issue::InvalidDecimal {
            field: "Charge amount",
            value: charge.to_string(),
        });
    }
    issues
}

/// Parse a plain decimal number: optional sign, ASCII digits, at most one `.`.
///
/// Exponents, thousands separators, surrounding whitespace, and special values
/// such as `NaN` are rejected so the result never depends on locale.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let unsigned = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !digits_only(whole) || !digits_only(fraction) {
        return None;
    }
    value.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_needs_five_elements() {
        let valid = Segment::from_elements("CLM", ["PATIENT001", "150", "", "", "11:B:1"]);
        assert!(check_claim(&valid).is_empty());

        let short = Segment::from_elements("CLM", ["PATIENT001", "150"]);
        assert_eq!(
            check_claim(&short),
            [Issue::TooFewElements {
                required: 5,
                found: 2
            }]
        );
    }

    #[test]
    fn service_with_two_elements_stops_after_count() {
        let segment = Segment::from_elements("SV1", ["", "abc"]);
        let issues = check_professional_service(&segment);
        assert_eq!(
            issues,
            [Issue::TooFewElements {
                required: 3,
                found: 2
            }]
        );
    }

    #[test]
    fn service_with_bad_charge() {
        let segment = Segment::from_elements("SV1", ["99213", "abc", "UN"]);
        let issues = check_professional_service(&segment);
        assert_eq!(
            issues,
            [Issue::InvalidDecimal {
                field: "Charge amount",
                value: "abc".to_string(),
            }]
        );
    }

    #[test]
    fn service_with_blank_procedure_and_charge() {
        let segment = Segment::from_elements("SV1", ["  ", "", "UN"]);
        let issues = check_professional_service(&segment);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message(), "Procedure code is required");
        assert_eq!(
            issues[1].message(),
            "Charge amount '' is not a valid decimal number"
        );
    }

    #[test]
    fn valid_service() {
        let segment = Segment::from_elements("SV1", ["HC:99213", "100.50", "UN", "1"]);
        assert!(check_professional_service(&segment).is_empty());
    }

    #[test]
    fn parse_decimal_accepts_plain_numbers() {
        assert_eq!(parse_decimal("150"), Some(150.0));
        assert_eq!(parse_decimal("150.25"), Some(150.25));
        assert_eq!(parse_decimal("-3.5"), Some(-3.5));
        assert_eq!(parse_decimal("+7"), Some(7.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("5."), Some(5.0));
    }

    #[test]
    fn parse_decimal_rejects_everything_else() {
        for value in [
            "", "abc", "1,000.00", "1e5", "NaN", "inf", " 12", "12 ", "1.2.3", ".", "-", "+-1",
            "1_000",
        ] {
            assert_eq!(parse_decimal(value), None, "accepted {value:?}");
        }
    }
}
