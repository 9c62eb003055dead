//! Report output for X12 validation results.
//!
//! Renders a [`x12_validate::ValidationReport`] together with the raw input
//! as plain text or JSON and writes it to a file or stream. Failing to write
//! is the only error path; validation itself never fails.

pub mod error;
pub mod render;
pub mod writer;

pub use error::{ReportError, Result};
pub use render::{
    REPORT_SCHEMA, REPORT_SCHEMA_VERSION, ReportFormat, render, render_json, render_text,
};
pub use writer::{write_report, write_to};
