use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cbs_generate::GenerationStats;
use cbs_model::{ClaimStatus, Department, NullableField};

use crate::types::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    match &result.output_path {
        Some(path) => println!(
            "Output: {} ({}, {} rows)",
            path.display(),
            result.format,
            result.rows_written
        ),
        None => println!("Output: dry run, nothing written"),
    }
    println!(
        "Seed: {}  Reference date: {}  Payers: {}",
        result.config.seed, result.config.reference_date, result.payer_pool_size
    );
    println!("{}", department_table(&result.stats));
    println!();
    println!("Data quality:");
    println!("{}", quality_table(&result.stats));
    println!();
    println!("Claims:");
    println!("{}", claim_table(&result.stats));
}

/// Per-department record counts with a TOTAL row.
pub fn department_table(stats: &GenerationStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Department"),
        header_cell("Records"),
        header_cell("Inpatient"),
        header_cell("Emergency"),
        header_cell("Outliers"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_inpatient = 0usize;
    let mut total_emergency = 0usize;
    for department in Department::ALL {
        let counts = stats
            .by_department
            .get(&department)
            .copied()
            .unwrap_or_default();
        total_inpatient += counts.inpatient;
        total_emergency += counts.emergency;
        table.add_row(vec![
            Cell::new(department)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(counts.records),
            Cell::new(counts.inpatient),
            Cell::new(counts.emergency),
            count_cell(counts.outliers, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.records).add_attribute(Attribute::Bold),
        Cell::new(total_inpatient).add_attribute(Attribute::Bold),
        Cell::new(total_emergency).add_attribute(Attribute::Bold),
        count_cell(stats.outliers, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Injected missing values and outliers.
pub fn quality_table(stats: &GenerationStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Defect"),
        header_cell("Count"),
        header_cell("Rate"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for field in NullableField::ALL {
        table.add_row(vec![
            Cell::new(field.column()),
            dim_cell("null"),
            count_cell(stats.null_count(field), Color::Yellow),
            Cell::new(percent(stats.null_rate(field))),
        ]);
    }
    table.add_row(vec![
        Cell::new("charge_amount_USD"),
        dim_cell("outlier"),
        count_cell(stats.outliers, Color::Yellow),
        Cell::new(percent(stats.outlier_rate())),
    ]);
    table
}

/// Record counts per claim status.
pub fn claim_table(stats: &GenerationStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Claim status"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for status in ClaimStatus::ALL {
        let count = stats.by_claim_status.get(&status).copied().unwrap_or(0);
        table.add_row(vec![Cell::new(status), count_cell(count, Color::Green)]);
    }
    table
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

fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
