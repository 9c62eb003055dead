//! The tokenized segment record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::delimiters::DEFAULT_ELEMENT_SEPARATOR;

/// One segment of an X12 document.
///
/// `elements` excludes the tag; position in the vector is the element's meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    tag: String,
    elements: Vec<String>,
    raw: String,
}

impl Segment {
    /// Create a segment from its parts.
    pub fn new(tag: impl Into<String>, elements: Vec<String>, raw: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            elements,
            raw: raw.into(),
        }
    }

    /// Create a segment from a tag and elements, rebuilding `raw` with the default separator.
    pub fn from_elements<I, S>(tag: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tag = tag.into();
        let elements: Vec<String> = elements.into_iter().map(Into::into).collect();
        let mut raw = tag.clone();
        for element in &elements {
            raw.push(DEFAULT_ELEMENT_SEPARATOR);
            raw.push_str(element);
        }
        Self { tag, elements, raw }
    }

    /// Segment identifier, e.g. `ISA` or `NM1`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Positional elements following the tag.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Element at `index`, if the segment is long enough.
    pub fn element(&self, index: usize) -> Option<&str> {
        self.elements.get(index).map(String::as_str)
    }

    /// Number of elements after the tag.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Original segment text without its terminator.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_elements_rebuilds_raw() {
        let segment = Segment::from_elements("ST", ["837", "0001"]);
        assert_eq!(segment.tag(), "ST");
        assert_eq!(segment.raw(), "ST*837*0001");
        assert_eq!(segment.element_count(), 2);
        assert_eq!(segment.to_string(), "ST*837*0001");
    }

    #[test]
    fn element_out_of_range_is_none() {
        let segment = Segment::from_elements("CLM", Vec::<String>::new());
        assert_eq!(segment.element(0), None);
        assert_eq!(segment.raw(), "CLM");
    }
}
