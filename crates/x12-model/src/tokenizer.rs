//! Segment tokenizer.
//!
//! Splits a document on the segment terminator, then each fragment on the
//! element separator. Tokenizing is total: malformed segments are still
//! produced and left for the segment rules to judge.

use crate::delimiters::Delimiters;
use crate::segment::Segment;

/// Delimiter-driven tokenizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    delimiters: Delimiters,
}

impl Tokenizer {
    /// Create a tokenizer for the given delimiters.
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    /// Delimiters used by this tokenizer.
    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// Lazily iterate the segments of `text` in document order.
    ///
    /// Fragments that are empty after trimming whitespace are skipped.
    pub fn segments<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Segment> + 'a {
        text.split(self.delimiters.segment_terminator)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(move |fragment| self.split_fragment(fragment))
    }

    /// Tokenize `text` into an ordered vector of segments.
    pub fn tokenize(&self, text: &str) -> Vec<Segment> {
        let segments: Vec<Segment> = self.segments(text).collect();
        tracing::trace!(segment_count = segments.len(), "tokenized document");
        segments
    }

    fn split_fragment(&self, fragment: &str) -> Segment {
        let mut parts = fragment.split(self.delimiters.element_separator);
        // `split` always yields at least one item, possibly empty.
        let tag = parts.next().unwrap_or_default();
        let elements = parts.map(str::to_string).collect();
        Segment::new(tag, elements, fragment)
    }
}

/// Tokenize `text` with the default `~` / `*` delimiters.
pub fn tokenize(text: &str) -> Vec<Segment> {
    Tokenizer::default().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_segments_and_elements() {
        let segments = tokenize("ST*837*0001~BHT*0019*00~");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].tag(), "ST");
        assert_eq!(segments[0].elements(), ["837", "0001"]);
        assert_eq!(segments[0].raw(), "ST*837*0001");
        assert_eq!(segments[1].tag(), "BHT");
        assert_eq!(segments[1].elements(), ["0019", "00"]);
    }

    #[test]
    fn discards_blank_fragments() {
        let segments = tokenize("~~ST*837~  \n~SE*1~\n");
        let tags: Vec<&str> = segments.iter().map(Segment::tag).collect();
        assert_eq!(tags, ["ST", "SE"]);
    }

    #[test]
    fn trims_line_breaks_between_segments() {
        let segments = tokenize("ST*837*0001~\nSE*2*0001~\n");
        assert_eq!(segments[1].raw(), "SE*2*0001");
        assert_eq!(segments[1].tag(), "SE");
    }

    #[test]
    fn keeps_empty_elements_in_position() {
        let segments = tokenize("NM1*85**SMITH~");
        assert_eq!(segments[0].elements(), ["85", "", "SMITH"]);
    }

    #[test]
    fn tag_only_segment_has_no_elements() {
        let segments = tokenize("CLM~");
        assert_eq!(segments[0].tag(), "CLM");
        assert!(segments[0].elements().is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }

    #[test]
    fn honours_custom_delimiters() {
        let tokenizer = Tokenizer::new(Delimiters::new('\'', '+').unwrap());
        let segments = tokenizer.tokenize("UNH+1+ORDERS'BGM+220'");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].tag(), "UNH");
        assert_eq!(segments[0].elements(), ["1", "ORDERS"]);
    }

    #[test]
    fn lazy_iteration_is_restartable() {
        let tokenizer = Tokenizer::default();
        let text = "ISA*00~GS*HC~ZZZ*1*2~";
        let first: Vec<Segment> = tokenizer.segments(text).collect();
        let second: Vec<Segment> = tokenizer.segments(text).collect();
        assert_eq!(first, second);
        assert_eq!(first, tokenizer.tokenize(text));
    }
}
