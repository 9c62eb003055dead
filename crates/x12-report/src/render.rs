//! Report renderings.

use std::fmt::Write as _;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use x12_validate::{Category, ValidationReport};

use crate::error::Result;

/// Schema identifier embedded in JSON reports.
pub const REPORT_SCHEMA: &str = "x12-validate.report";
/// Schema version embedded in JSON reports.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text for people.
    #[default]
    Text,
    /// JSON for machines.
    Json,
}

impl ReportFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct ReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    report: &'a ValidationReport,
    raw_input: &'a str,
}

/// Render a report plus the raw input it was produced from.
pub fn render(format: ReportFormat, report: &ValidationReport, raw: &str) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report, raw)),
        ReportFormat::Json => render_json(report, raw),
    }
}

/// Plain text rendering: status, counts, one line per violation, then the input.
pub fn render_text(report: &ValidationReport, raw: &str) -> String {
    let mut out = String::new();
    let status = if report.is_valid() { "VALID" } else { "INVALID" };
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Status: {status}");
    let _ = writeln!(
        out,
        "Segments: {} ({} without rules)",
        report.segment_count, report.skipped_count
    );
    let _ = writeln!(
        out,
        "Violations: {} ({} {}, {} {})",
        report.error_count(),
        report.count_by_category(Category::Structure),
        Category::Structure.label().to_lowercase(),
        report.count_by_category(Category::Semantic),
        Category::Semantic.label().to_lowercase(),
    );
    for violation in &report.violations {
        let _ = writeln!(out, "  [{}] {}", violation.tag, violation.message);
    }
    out.push('\n');
    out.push_str("Raw input:\n");
    out.push_str(raw);
    if !raw.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// JSON rendering with schema metadata and a generation timestamp.
pub fn render_json(report: &ValidationReport, raw: &str) -> Result<String> {
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        report,
        raw_input: raw,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    Ok(format!("{json}\n"))
}
