//! X12 837 segment validation.
//!
//! This crate validates tokenized X12 documents segment by segment:
//!
//! - **Envelope**: ISA element count and repetition separator, GS functional
//!   identifier, ST transaction set code
//! - **Header**: BHT element count
//! - **Names**: NM1 element count and entity identifier code set
//! - **Claims**: CLM element count, SV1 procedure code and charge amount
//!
//! Segments whose tag has no registered rule pass through unchecked.
//! Validation never fails; every problem becomes a [`Violation`] in the
//! returned [`ValidationReport`].
//!
//! # Example
//!
//! ```
//! use x12_validate::validate_document;
//!
//! let report = validate_document("ST*835*0001~CLM*A~");
//! assert!(!report.is_valid());
//! for violation in &report.violations {
//!     println!("[{}] {}", violation.tag, violation.message);
//! }
//! ```

mod checks;
mod engine;
mod issue;
mod report;
pub mod rules;
pub mod sample;

pub use checks::{ENTITY_IDENTIFIER_CODES, SegmentRule, parse_decimal};
pub use engine::{ValidationEngine, validate_document};
pub use issue::Issue;
pub use report::{ValidationReport, Violation};
pub use rules::{Category, RuleRegistry};
pub use sample::SAMPLE_CLAIM;
