use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use x12_cli::run::ValidationRun;
use x12_validate::Category;

pub fn print_summary(run: &ValidationRun) {
    println!("Input: {}", run.source);
    if let Some(path) = &run.report_path {
        println!("Report: {}", path.display());
    }
    let report = &run.report;
    println!(
        "Segments: {} ({} without rules)",
        report.segment_count, report.skipped_count
    );

    if report.is_valid() {
        println!("Status: VALID");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Segment"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for (index, violation) in report.violations.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).set_alignment(CellAlignment::Right),
            Cell::new(&violation.tag).add_attribute(Attribute::Bold),
            category_cell(violation.category),
            Cell::new(&violation.message),
        ]);
    }
    println!("{table}");
    println!(
        "Status: INVALID ({} violations: {} structure, {} semantic)",
        report.error_count(),
        report.count_by_category(Category::Structure),
        report.count_by_category(Category::Semantic),
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn category_cell(category: Category) -> Cell {
    let color = match category {
        Category::Structure => Color::Red,
        Category::Semantic => Color::Yellow,
    };
    Cell::new(category.label()).fg(color)
}
