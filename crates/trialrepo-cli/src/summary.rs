use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use trialrepo_cli::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input_dir.display());
    match &result.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!(
        "Records: {}  Columns: {}",
        result.record_count(),
        result.column_count
    );
    if result.rows.is_empty() {
        println!("No patient*.json files found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("File"),
        header_cell("Fields"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for summary in &result.rows {
        table.add_row(vec![
            dim_cell(summary.row),
            Cell::new(&summary.file_name),
            fields_cell(summary.populated_fields, result.column_count),
        ]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Rows missing some of the table's columns are highlighted.
fn fields_cell(populated: usize, total: usize) -> Cell {
    let text = format!("{populated}/{total}");
    if populated < total {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text).fg(Color::Green)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
