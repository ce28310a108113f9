use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use caldim_cli::pipeline::Delivery;
use caldim_cli::tally::DayCounts;

use crate::types::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    let outcome = &result.outcome;
    // The statement went to stdout; nothing else may be printed there.
    if outcome.delivery == Delivery::Stdout {
        return;
    }
    let options = &outcome.options;
    println!("Table: {}", options.table_name);
    println!("Years: {}-{}", options.from_year, options.to_year);
    println!("Layout: {:?}", options.layout);
    println!("Rows: {}", outcome.row_count);
    match &outcome.written {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (not written)"),
    }
    for warning in &outcome.warnings {
        println!("Warning: {warning}");
    }
    if !result.show_table {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Year"),
        header_cell("Days"),
        header_cell("Weekdays"),
        header_cell("Weekend"),
        header_cell("Holidays"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for year in outcome.tally.years() {
        table.add_row(count_row(
            Cell::new(year.year)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            &year.counts,
        ));
    }
    let total = count_row(
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        &outcome.tally.total(),
    );
    table.add_row(
        total
            .into_iter()
            .map(|cell| cell.add_attribute(Attribute::Bold)),
    );
    println!("{table}");
}

fn count_row(label: Cell, counts: &DayCounts) -> Vec<Cell> {
    vec![
        label,
        Cell::new(counts.days),
        Cell::new(counts.week_days),
        Cell::new(counts.weekend_days),
        count_cell(counts.public_holidays, Color::Green),
    ]
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
