//! Terminal summary of an analysis run.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use rust_decimal::Decimal;

use drg_core::round_money;
use drg_model::ReportRow;
use drg_report::amount_cell;

use crate::types::AnalysisResult;

/// Create a styled header cell.
fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

/// Create a dimmed cell for placeholder values.
fn dim_cell(text: impl ToString) -> Cell {
    Cell::new(text).fg(Color::DarkGrey)
}

/// Create a cell for a count, colored when non-zero and dimmed otherwise.
fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

/// Set the alignment of one column.
fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Apply the standard table style used across commands.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Apply the wide style used for the bucket summary table.
fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    if table.column_count() >= 10 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
        ]);
    }
}

/// Overall denial percentage, rounded like the per-bucket figure.
fn overall_percent(denied: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    round_money(Decimal::from(denied) * Decimal::ONE_HUNDRED / Decimal::from(total))
}

/// Overall average saving per claim, from the already-rounded savings total.
fn overall_average(savings: Decimal, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    round_money(savings / Decimal::from(total))
}

fn sdx_cell(row: &ReportRow) -> Cell {
    if row.sdx_set.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(row.sdx_set_label())
    }
}

/// Print the analysis summary: input echo, a bucket preview table with a
/// TOTAL row over every bucket, and diagnostics for skipped input.
pub fn print_summary(result: &AnalysisResult, top: usize) {
    println!(
        "Claims: {} ({} rows read, {} aggregated)",
        result.claims_path.display(),
        result.claims_rows_read,
        result.claims_bucketed
    );
    println!(
        "Lookup: {} ({} codes)",
        result.lookup_path.display(),
        result.lookup_entries
    );
    match &result.report_path {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: not written (dry run)"),
    }
    println!();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("DRG"),
        header_cell("PRIM_DX"),
        header_cell("SDX Set"),
        header_cell("LOS Bin"),
        header_cell("Claims"),
        header_cell("Approved"),
        header_cell("Denied"),
        header_cell("Denial %"),
        header_cell("Savings"),
        header_cell("Avg/Claim"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    align_column(&mut table, 8, CellAlignment::Right);
    align_column(&mut table, 9, CellAlignment::Right);

    for row in result.rows.iter().take(top) {
        table.add_row(vec![
            Cell::new(row.drg.clone()),
            Cell::new(row.prim_dx.clone()),
            sdx_cell(row),
            Cell::new(row.los_bin.label()),
            Cell::new(row.total_claims),
            count_cell(row.approved, Color::Green),
            count_cell(row.denied, Color::Red),
            Cell::new(amount_cell(row.denial_percent)),
            Cell::new(amount_cell(row.total_savings)),
            Cell::new(amount_cell(row.avg_saving_per_claim)),
        ]);
    }

    // The TOTAL row covers every bucket, not just the previewed ones.
    let mut total_claims = 0usize;
    let mut total_approved = 0usize;
    let mut total_denied = 0usize;
    let mut total_savings = Decimal::ZERO;
    for row in &result.rows {
        total_claims += row.total_claims;
        total_approved += row.approved;
        total_denied += row.denied;
        total_savings += row.total_savings;
    }
    let savings = round_money(total_savings);
    table.add_row(vec![
        Cell::new("TOTAL").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("All buckets").fg(Color::Cyan).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_claims).add_attribute(Attribute::Bold),
        count_cell(total_approved, Color::Green),
        count_cell(total_denied, Color::Red),
        Cell::new(amount_cell(overall_percent(total_denied, total_claims)))
            .add_attribute(Attribute::Bold),
        Cell::new(amount_cell(savings)).add_attribute(Attribute::Bold),
        Cell::new(amount_cell(overall_average(savings, total_claims)))
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if result.rows.len() > top {
        println!(
            "Showing {top} of {} buckets; the report carries all of them.",
            result.rows.len()
        );
    }
    if result.claims_dropped > 0 {
        println!("Dropped {} claims with no usable LOS.", result.claims_dropped);
    }
    if result.skipped_savings > 0 {
        println!(
            "Skipped {} claim rows with a non-numeric IDSavings.",
            result.skipped_savings
        );
    }
    if result.lookup_skipped > 0 {
        println!(
            "Skipped {} lookup rows with an unrecognized severity class.",
            result.lookup_skipped
        );
    }
    println!();
    println!("Denial analysis completed for {} buckets.", result.rows.len());
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::{overall_average, overall_percent};

    #[test]
    fn overall_percent_rounds_half_away_from_zero() {
        assert_eq!(overall_percent(1, 800), dec!(0.13));
        assert_eq!(overall_percent(1, 3), dec!(33.33));
        assert_eq!(overall_percent(0, 0), Decimal::ZERO);
    }

    #[test]
    fn overall_average_divides_the_rounded_total() {
        assert_eq!(overall_average(dec!(500.00), 3), dec!(166.67));
        assert_eq!(overall_average(dec!(0.01), 2), dec!(0.01));
        assert_eq!(overall_average(dec!(10.00), 0), Decimal::ZERO);
    }
}
