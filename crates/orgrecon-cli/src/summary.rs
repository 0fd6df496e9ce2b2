use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::MatchRunResult;

/// Print the operator-facing run summary.
pub fn print_summary(result: &MatchRunResult) {
    println!("Dataset A: {}", result.dataset_a.display());
    println!("Dataset B: {}", result.dataset_b.display());
    if let Some(path) = &result.output {
        println!("Match report: {}", path.display());
    }
    if let Some(path) = &result.summary_json {
        println!("Run summary: {}", path.display());
    }
    println!("{}", summary_table(result));
    println!("There are {} matches.", result.matches);
    if !result.unknown_state_codes.is_empty() {
        println!(
            "Unknown state codes: {}",
            result.unknown_state_codes.join(", ")
        );
    }
}

/// Counts table for one finished run.
pub fn summary_table(result: &MatchRunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Dataset A rows"),
        Cell::new(result.dataset_a_rows),
    ]);
    table.add_row(vec![
        Cell::new("Dataset B rows"),
        Cell::new(result.dataset_b_rows),
    ]);
    table.add_row(vec![Cell::new("Comparisons"), Cell::new(result.comparisons)]);
    table.add_row(vec![
        Cell::new("Matches"),
        count_cell(result.matches, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Distinct matches"),
        count_cell(result.distinct_content, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Unknown state codes"),
        count_cell(result.unknown_state_codes.len(), Color::Yellow),
    ]);
    table
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).add_attribute(Attribute::Dim)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
