use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use aecc_cli::pipeline::{CheckReport, RunSummary};
use aecc_model::{ERROR_CLASSES, PRE_ECDG_CLASSES};

pub fn print_group_summary(summary: &RunSummary) {
    println!("Episodes: {}", summary.episodes);
    println!("Output: {}", summary.output.display());
    println!("Elapsed: {} ms", summary.elapsed_ms);

    let mut table = Table::new();
    table.set_header(vec![header_cell("End class"), header_cell("Episodes")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (class, count) in &summary.class_counts {
        table.add_row(vec![class_cell(class), Cell::new(count)]);
    }
    if summary.unclassified > 0 {
        table.add_row(vec![
            Cell::new("(unclassified)")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.unclassified).fg(Color::Red),
        ]);
    }
    println!("{table}");

    if summary.unclassified > 0 {
        eprintln!(
            "warning: {} episode(s) matched no complexity band; check the reference pack",
            summary.unclassified
        );
    }
}

pub fn print_classes() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Kind"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for class in PRE_ECDG_CLASSES {
        table.add_row(vec![
            class_cell(class.code()),
            Cell::new("pre-ECDG"),
            Cell::new(class.description()),
        ]);
    }
    for class in ERROR_CLASSES {
        table.add_row(vec![
            class_cell(class.code()),
            Cell::new("error"),
            Cell::new(class.description()),
        ]);
    }
    println!("{table}");
}

pub fn print_check_report(report: &CheckReport) {
    println!("Reference pack: {}", report.tables_dir.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Diagnosis short list codes"),
        Cell::new(report.counts.diagnosis_codes),
    ]);
    table.add_row(vec![
        Cell::new("Intercepts"),
        Cell::new(report.counts.intercepts),
    ]);
    table.add_row(vec![
        Cell::new("Triage coefficients"),
        Cell::new(report.counts.triage_rows),
    ]);
    table.add_row(vec![
        Cell::new("Age coefficients"),
        Cell::new(report.counts.age_rows),
    ]);
    table.add_row(vec![
        Cell::new("Interactions"),
        Cell::new(report.counts.interaction_rows),
    ]);
    table.add_row(vec![
        Cell::new("Threshold bands"),
        Cell::new(report.counts.threshold_rows),
    ]);
    println!("{table}");

    if report.issues.is_empty() {
        println!("No issues found.");
        return;
    }

    let mut issues = Table::new();
    issues.set_header(vec![
        header_cell("Table"),
        header_cell("ECDG"),
        header_cell("Issue"),
    ]);
    apply_table_style(&mut issues);
    for issue in &report.issues {
        issues.add_row(vec![
            Cell::new(&issue.table),
            if issue.ecdg.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(&issue.ecdg)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            },
            Cell::new(&issue.message).fg(Color::Red),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{issues}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn class_cell(code: &str) -> Cell {
    if code.starts_with("E99") {
        Cell::new(code).fg(Color::Yellow)
    } else {
        Cell::new(code)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
