use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::analysis::{
    GrowthEvaluation, GrowthStatus, HerdMetrics, MortalitySummary, ShipmentRevenue, StockEstimate,
};
use crate::reference::{ConsumptionReference, GrowthReference};

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn status_label(status: GrowthStatus) -> String {
    let label = status.to_string();
    match status {
        GrowthStatus::WithinRange => label.green().bold().to_string(),
        GrowthStatus::AboveRange => label.cyan().bold().to_string(),
        GrowthStatus::BelowRange => label.red().bold().to_string(),
        GrowthStatus::NoReferenceForAge | GrowthStatus::AwaitingInput => {
            label.yellow().to_string()
        }
        GrowthStatus::InsufficientData | GrowthStatus::ComputationError => {
            label.red().to_string()
        }
    }
}

/// Format a growth evaluation as a table with its status line.
pub fn format_growth_report(eval: &GrowthEvaluation) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Growth Evaluation".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));
    output.push_str(&format!("Status: {}\n", status_label(eval.status)));

    let mut table = styled_table();
    table.set_header(vec!["Metric", "Value"]);
    if let Some(bracket) = eval.bracket {
        table.add_row(vec![Cell::new("Age bracket"), Cell::new(bracket.to_string())]);
    }
    if let Some(days) = eval.elapsed_days {
        table.add_row(vec![Cell::new("Days in bracket"), Cell::new(days.to_string())]);
    }
    if let Some(actual) = eval.actual_gain_kg {
        table.add_row(vec![
            Cell::new("Actual gain"),
            Cell::new(format!("{:.1} g/day", actual * 1000.0)),
        ]);
    }
    if let Some(reference) = eval.reference_gain_kg {
        table.add_row(vec![
            Cell::new("Reference gain"),
            Cell::new(format!("{:.1} g/day", reference * 1000.0)),
        ]);
    }
    if let Some(diff) = eval.percent_diff {
        table.add_row(vec![
            Cell::new("Difference"),
            Cell::new(format!("{diff:+.1}%")),
        ]);
    }
    output.push_str(&format!("{table}\n"));
    output.push_str(&format!("{}\n", eval.message));
    output
}

pub fn print_growth_report(eval: &GrowthEvaluation) {
    print!("{}", format_growth_report(eval));
}

/// Format a feed-stock duration estimate.
pub fn format_stock_report(estimate: &StockEstimate) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Feed Stock Estimate".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let days = if estimate.is_unbounded() {
        "unbounded (nothing consumes)".to_string()
    } else {
        format!("{} days", estimate.estimated_days.floor() as i64)
    };

    let mut table = styled_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Daily consumption"),
        Cell::new(format!("{:.2} kg/day", estimate.daily_consumption_kg)),
    ]);
    table.add_row(vec![Cell::new("Supply lasts"), Cell::new(days)]);
    table.add_row(vec![
        Cell::new("Animals counted"),
        Cell::new(estimate.total_animals.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Batches counted"),
        Cell::new(estimate.batches_counted.to_string()),
    ]);
    if estimate.batches_skipped > 0 {
        table.add_row(vec![
            Cell::new("Batches outside table"),
            Cell::new(estimate.batches_skipped.to_string()),
        ]);
    }
    output.push_str(&format!("{table}\n"));
    output
}

pub fn print_stock_report(estimate: &StockEstimate) {
    print!("{}", format_stock_report(estimate));
}

/// Format herd summary metrics.
pub fn format_herd_summary(metrics: &HerdMetrics) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Herd Summary".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = styled_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Sheds"), Cell::new(metrics.num_sheds.to_string())]);
    table.add_row(vec![Cell::new("Silos"), Cell::new(metrics.num_silos.to_string())]);
    table.add_row(vec![
        Cell::new("Batches (active/total)"),
        Cell::new(format!("{}/{}", metrics.active_batches, metrics.num_batches)),
    ]);
    table.add_row(vec![
        Cell::new("Animals on hand"),
        Cell::new(metrics.total_animals.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Animals at entry"),
        Cell::new(metrics.initial_animals.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Losses logged"),
        Cell::new(metrics.total_losses.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Animals shipped"),
        Cell::new(metrics.total_shipped.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Mortality rate"),
        Cell::new(format!("{:.2}%", metrics.mortality_rate_percent)),
    ]);
    table.add_row(vec![
        Cell::new("Feed on hand"),
        Cell::new(format!("{:.1} kg", metrics.total_feed_kg)),
    ]);
    output.push_str(&format!("{table}\n"));
    output
}

pub fn print_herd_summary(metrics: &HerdMetrics) {
    print!("{}", format_herd_summary(metrics));
}

/// Format the daily gain reference table.
pub fn format_growth_table(table_rows: &[GrowthReference]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Daily Gain Reference".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = styled_table();
    table.set_header(vec!["Age (days)", "Live Weight (kg)", "Gain (g/day)"]);
    for row in table_rows {
        let mark = if row.estimated { "*" } else { "" };
        table.add_row(vec![
            Cell::new(format!("{} - {}", row.bracket.start_day, row.bracket.end_day)),
            Cell::new(format!(
                "{:.1} -> {:.1}{mark}",
                row.start_weight_kg, row.end_weight_kg
            )),
            Cell::new(format!("{:.0}{mark}", row.expected_gain_grams)),
        ]);
    }
    output.push_str(&format!("{table}\n"));
    if table_rows.iter().any(|r| r.estimated) {
        output.push_str("* extrapolated values\n");
    }
    output
}

pub fn print_growth_table(table_rows: &[GrowthReference]) {
    print!("{}", format_growth_table(table_rows));
}

/// Format the daily consumption reference table.
pub fn format_consumption_table(table_rows: &[ConsumptionReference]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        "Daily Consumption Reference".bold().green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = styled_table();
    table.set_header(vec!["Age (days)", "Intake (kg/day)"]);
    for row in table_rows {
        table.add_row(vec![
            Cell::new(format!("{} - {}", row.bracket.start_day, row.bracket.end_day)),
            Cell::new(format!("{:.2}", row.daily_kg)),
        ]);
    }
    output.push_str(&format!("{table}\n"));
    output
}

pub fn print_consumption_table(table_rows: &[ConsumptionReference]) {
    print!("{}", format_consumption_table(table_rows));
}

/// Format a mortality summary.
pub fn format_mortality_summary(summary: &MortalitySummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Mortality Summary".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = styled_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Initial count"), Cell::new(summary.initial.to_string())]);
    table.add_row(vec![Cell::new("Losses"), Cell::new(summary.losses.to_string())]);
    table.add_row(vec![Cell::new("Current count"), Cell::new(summary.current.to_string())]);
    table.add_row(vec![
        Cell::new("Mortality rate"),
        Cell::new(format!("{:.2}%", summary.rate_percent)),
    ]);
    output.push_str(&format!("{table}\n"));
    output
}

pub fn print_mortality_summary(summary: &MortalitySummary) {
    print!("{}", format_mortality_summary(summary));
}

/// Format a shipment revenue projection.
pub fn format_revenue_report(revenue: &ShipmentRevenue) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Shipment Revenue".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = styled_table();
    table.set_header(vec!["Metric", "Gross Value"]);
    table.add_row(vec![Cell::new("Per truck"), Cell::new(format!("{:.2}", revenue.per_truck))]);
    table.add_row(vec![Cell::new("Per day"), Cell::new(format!("{:.2}", revenue.per_day))]);
    table.add_row(vec![Cell::new("Whole window"), Cell::new(format!("{:.2}", revenue.total))]);
    output.push_str(&format!("{table}\n"));
    output
}

pub fn print_revenue_report(revenue: &ShipmentRevenue) {
    print!("{}", format_revenue_report(revenue));
}
