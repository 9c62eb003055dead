//! Beginning of hierarchical transaction (BHT) checks.

use x12_model::Segment;

use super::require_elements;
use crate::issue::Issue;

/// Minimum BHT element count.
pub const MIN_ELEMENTS: usize = 4;

pub fn check(segment: &Segment) -> Vec<Issue> {
    require_elements(segment, MIN_ELEMENTS).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_elements_pass() {
        let segment = Segment::from_elements("BHT", ["0019", "00", "REF47517", "20230101"]);
        assert!(check(&segment).is_empty());
    }

    #[test]
    fn three_elements_fail() {
        let segment = Segment::from_elements("BHT", ["0019", "00", "REF47517"]);
        assert_eq!(
            check(&segment),
            [Issue::TooFewElements {
                required: 4,
                found: 3
            }]
        );
    }
}
