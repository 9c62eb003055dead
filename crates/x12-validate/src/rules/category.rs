//! Violation categories.

use serde::{Deserialize, Serialize};

/// Classification of a segment violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The segment has fewer elements than its type requires.
    Structure,
    /// A present element holds a wrong fixed value or fails a type parse.
    Semantic,
}

impl Category {
    /// Get all categories.
    pub const fn all() -> &'static [Self] {
        &[Self::Structure, Self::Semantic]
    }

    /// Parse category from a label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "structure" | "structural" => Some(Self::Structure),
            "semantic" => Some(Self::Semantic),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Structure => "Structure",
            Self::Semantic => "Semantic",
        }
    }

    /// Description for reports.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Structure => "Element count checks",
            Self::Semantic => "Fixed-value, code set, and type checks",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_labels() {
        for category in Category::all() {
            assert_eq!(Category::parse(category.label()), Some(*category));
        }
        assert_eq!(Category::parse("structural"), Some(Category::Structure));
        assert_eq!(Category::parse("limit"), None);
    }
}
