//! CLI argument definitions for the X12 validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use x12_model::{DEFAULT_ELEMENT_SEPARATOR, DEFAULT_SEGMENT_TERMINATOR};
use x12_report::ReportFormat;

#[derive(Parser)]
#[command(
    name = "x12-validate",
    version,
    about = "Validate X12 837 claim documents segment by segment",
    long_about = "Tokenize an X12 document and check each known segment \
                  (ISA, GS, ST, BHT, NM1, CLM, SV1) against its rule set.\n\n\
                  Segments without a rule are passed through unchecked."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow element values (claim data) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a document and print a summary.
    Validate(ValidateArgs),

    /// Print the built-in sample 837 document.
    Sample,

    /// List segment tags that have validation rules.
    Segments,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Document to validate ("-" or omitted reads stdin).
    #[arg(value_name = "INPUT", conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Validate the built-in sample document instead of INPUT.
    #[arg(long = "sample")]
    pub sample: bool,

    /// Write a report with the results and the raw input to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Segment terminator character.
    #[arg(
        long = "segment-terminator",
        value_name = "CHAR",
        default_value_t = DEFAULT_SEGMENT_TERMINATOR
    )]
    pub segment_terminator: char,

    /// Element separator character.
    #[arg(
        long = "element-separator",
        value_name = "CHAR",
        default_value_t = DEFAULT_ELEMENT_SEPARATOR
    )]
    pub element_separator: char,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(value: ReportFormatArg) -> Self {
        match value {
            ReportFormatArg::Text => ReportFormat::Text,
            ReportFormatArg::Json => ReportFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
