//! Report sinks.

use std::io::Write;
use std::path::{Path, PathBuf};

use x12_validate::ValidationReport;

use crate::error::{ReportError, Result};
use crate::render::{ReportFormat, render};

/// Write a rendered report to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`ReportError::Write`] when the directory or file cannot be written.
pub fn write_report(
    path: &Path,
    format: ReportFormat,
    report: &ValidationReport,
    raw: &str,
) -> Result<PathBuf> {
    let contents = render(format, report, raw)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| ReportError::write_error(path, e))?;
    }
    std::fs::write(path, contents).map_err(|e| ReportError::write_error(path, e))?;
    tracing::info!(path = %path.display(), ?format, "report written");
    Ok(path.to_path_buf())
}

/// Write a rendered report to any stream.
pub fn write_to<W: Write>(
    writer: &mut W,
    format: ReportFormat,
    report: &ValidationReport,
    raw: &str,
) -> Result<()> {
    let contents = render(format, report, raw)?;
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    Ok(())
}
