//! Integration tests for the validation run.

use std::path::Path;

use x12_cli::run::{InputSource, ReportTarget, run_validation, validate_text};
use x12_model::Delimiters;
use x12_report::ReportFormat;
use x12_validate::SAMPLE_CLAIM;

#[test]
fn test_input_source_from_arg() {
    assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
    assert_eq!(InputSource::from_arg(Some(Path::new("-"))), InputSource::Stdin);
    assert_eq!(
        InputSource::from_arg(Some(Path::new("claim.x12"))),
        InputSource::File("claim.x12".into())
    );
}

#[test]
fn test_sample_run_is_valid() {
    let run = run_validation(&InputSource::Sample, Delimiters::default(), None).unwrap();
    assert!(run.is_valid());
    assert_eq!(run.source, "<sample>");
    assert_eq!(run.raw, SAMPLE_CLAIM);
    assert!(run.report_path.is_none());
}

#[test]
fn test_file_run_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("claim.x12");
    std::fs::write(&input, "ST*835*0001~SV1*HC:99213*abc*UN~").unwrap();
    let target = ReportTarget {
        path: dir.path().join("out").join("report.txt"),
        format: ReportFormat::Text,
    };

    let run = run_validation(
        &InputSource::File(input),
        Delimiters::default(),
        Some(&target),
    )
    .unwrap();

    assert!(!run.is_valid());
    assert_eq!(run.report.violations.len(), 2);
    let written = std::fs::read_to_string(run.report_path.unwrap()).unwrap();
    assert!(written.starts_with("Status: INVALID"));
    assert!(written.contains("ST*835*0001~SV1*HC:99213*abc*UN~"));
}

#[test]
fn test_missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = InputSource::File(dir.path().join("missing.x12"));
    let err = run_validation(&missing, Delimiters::default(), None).unwrap_err();
    assert!(format!("{err:#}").contains("missing.x12"));
}

#[test]
fn test_unwritable_report_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let target = ReportTarget {
        path: blocker.join("report.json"),
        format: ReportFormat::Json,
    };
    let result = validate_text(
        "inline".to_string(),
        SAMPLE_CLAIM.to_string(),
        Delimiters::default(),
        Some(&target),
    );
    assert!(result.is_err());
}

#[test]
fn test_custom_delimiters() {
    let delimiters = Delimiters::new('\n', '|');
    assert!(delimiters.is_err());

    let delimiters = Delimiters::new('!', '|').unwrap();
    let run = validate_text(
        "inline".to_string(),
        "ST|837|0001!CLM|A!".to_string(),
        delimiters,
        None,
    )
    .unwrap();
    assert_eq!(run.report.segment_count, 2);
    assert_eq!(run.report.violations.len(), 1);
    assert_eq!(run.report.violations[0].tag, "CLM");
}
