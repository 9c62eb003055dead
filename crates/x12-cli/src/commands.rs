use anyhow::{Context, Result};
use comfy_table::Table;

use x12_cli::run::{InputSource, ReportTarget, ValidationRun, run_validation};
use x12_model::Delimiters;
use x12_validate::{RuleRegistry, SAMPLE_CLAIM};

use crate::cli::ValidateArgs;
use crate::summary::apply_table_style;

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationRun> {
    let delimiters = Delimiters::new(args.segment_terminator, args.element_separator)
        .context("invalid delimiters")?;
    let input = if args.sample {
        InputSource::Sample
    } else {
        InputSource::from_arg(args.input.as_deref())
    };
    let target = args.report.as_ref().map(|path| ReportTarget {
        path: path.clone(),
        format: args.format.into(),
    });
    run_validation(&input, delimiters, target.as_ref())
}

pub fn run_sample() {
    println!("{SAMPLE_CLAIM}");
}

pub fn run_segments() {
    let registry = RuleRegistry::standard();
    let mut table = Table::new();
    table.set_header(vec!["Tag", "Rule"]);
    apply_table_style(&mut table);
    for (tag, rule) in registry.iter() {
        table.add_row(vec![tag, rule.name()]);
    }
    println!("{table}");
}
