//! Validation run: read input, validate, optionally persist a report.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use x12_model::Delimiters;
use x12_report::{ReportFormat, write_report};
use x12_validate::{ValidationEngine, ValidationReport};

use crate::logging::redact_value;

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    /// Built-in sample document.
    Sample,
}

impl InputSource {
    /// Interpret a CLI path argument; missing or `-` means stdin.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            None => Self::Stdin,
            Some(path) if path == Path::new("-") => Self::Stdin,
            Some(path) => Self::File(path.to_path_buf()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Sample => "<sample>".to_string(),
        }
    }

    /// Read the whole document.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("read document from stdin")?;
                Ok(text)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("read document {}", path.display())),
            Self::Sample => Ok(x12_validate::SAMPLE_CLAIM.to_string()),
        }
    }
}

/// Report destination requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTarget {
    pub path: PathBuf,
    pub format: ReportFormat,
}

/// Outcome of one validation run.
#[derive(Debug)]
pub struct ValidationRun {
    pub source: String,
    pub raw: String,
    pub report: ValidationReport,
    pub report_path: Option<PathBuf>,
}

impl ValidationRun {
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

/// Validate an in-memory document and optionally write a report.
pub fn validate_text(
    source: String,
    raw: String,
    delimiters: Delimiters,
    target: Option<&ReportTarget>,
) -> Result<ValidationRun> {
    let span = info_span!("validate", source = %source);
    let _guard = span.enter();
    let start = Instant::now();

    let engine = ValidationEngine::new().with_delimiters(delimiters);
    let report = engine.validate_document(&raw);
    for violation in &report.violations {
        debug!(
            tag = %violation.tag,
            category = violation.category.label(),
            message = redact_value(&violation.message),
            "violation"
        );
    }
    if report.is_valid() {
        info!(
            segment_count = report.segment_count,
            duration_ms = start.elapsed().as_millis(),
            "document is valid"
        );
    } else {
        warn!(
            segment_count = report.segment_count,
            violation_count = report.violations.len(),
            duration_ms = start.elapsed().as_millis(),
            "document has violations"
        );
    }

    let report_path = match target {
        Some(target) => Some(
            write_report(&target.path, target.format, &report, &raw)
                .with_context(|| format!("write report {}", target.path.display()))?,
        ),
        None => None,
    };

    Ok(ValidationRun {
        source,
        raw,
        report,
        report_path,
    })
}

/// Read `input`, validate it, and optionally write a report.
pub fn run_validation(
    input: &InputSource,
    delimiters: Delimiters,
    target: Option<&ReportTarget>,
) -> Result<ValidationRun> {
    let raw = input.read()?;
    validate_text(input.label(), raw, delimiters, target)
}
