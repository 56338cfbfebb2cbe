//! Writes results to stdout as text columns or JSON.

use std::fmt::Write as _;

use costline_core::costing::{
    ChartPoint, CostBreakdown, CostHistoryPoint, LineCostRow, LiveEstimate, ReportCost,
    TrendAnalysis,
};
use costline_shared::types::{format_amount, format_currency};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Renders either the JSON form of `value` or the text produced by `table`.
pub fn render<T, F>(format: OutputFormat, value: &T, table: F) -> anyhow::Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table()),
    }
}

/// Column layout shared by every breakdown table.
pub struct Table {
    currency: String,
    out: String,
}

impl Table {
    /// Starts a table with a leading key column.
    pub fn breakdown(key: &str, currency: &str) -> Self {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{key:<14} {:>16} {:>16} {:>16} {:>12} {:>16}",
            "labor", "indirect", "total", "quantity", "cost/unit"
        );
        Self {
            currency: currency.to_string(),
            out,
        }
    }

    /// Appends a breakdown row.
    pub fn row(&mut self, key: &str, cost: &CostBreakdown) {
        let _ = writeln!(
            self.out,
            "{key:<14} {:>16} {:>16} {:>16} {:>12} {:>16}",
            format_currency(cost.labor_cost, &self.currency),
            format_currency(cost.indirect_cost, &self.currency),
            format_currency(cost.total_cost, &self.currency),
            format_amount(cost.quantity_produced),
            format_currency(cost.cost_per_unit, &self.currency),
        );
    }

    /// Finished text.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Keyed breakdowns, one row each.
pub fn breakdown_table<'a, K, I>(key: &str, rows: I, currency: &str) -> String
where
    K: std::fmt::Display + 'a,
    I: IntoIterator<Item = (&'a K, &'a CostBreakdown)>,
{
    let mut table = Table::breakdown(key, currency);
    for (id, cost) in rows {
        table.row(&id.to_string(), cost);
    }
    table.finish()
}

/// Per-line rows of one product.
pub fn line_rows_table(rows: &[LineCostRow], currency: &str) -> String {
    let mut table = Table::breakdown("line", currency);
    for row in rows {
        table.row(&row.line_name, &row.cost);
    }
    table.finish()
}

/// Calendar chart cells.
pub fn chart_table(points: &[ChartPoint], currency: &str) -> String {
    let mut table = Table::breakdown("date / line", currency);
    for point in points {
        table.row(&format!("{} {}", point.date, point.line_id), &point.cost);
    }
    table.finish()
}

/// Per-report costs.
pub fn report_costs_table<'a, I>(costs: I, currency: &str) -> String
where
    I: IntoIterator<Item = (&'a costline_shared::types::ReportId, &'a ReportCost)>,
{
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:>16} {:>16} {:>16} {:>16} {:>12} {:>16}",
        "report", "labor", "shared", "supervisor", "total", "quantity", "cost/unit"
    );
    for (id, cost) in costs {
        let _ = writeln!(
            out,
            "{:<14} {:>16} {:>16} {:>16} {:>16} {:>12} {:>16}",
            id.as_str(),
            format_currency(cost.labor_cost, currency),
            format_currency(cost.shared_indirect_cost, currency),
            format_currency(cost.supervisor_indirect_cost, currency),
            format_currency(cost.total_cost, currency),
            format_amount(cost.quantity_produced),
            format_currency(cost.cost_per_unit, currency),
        );
    }
    out
}

/// Date series of one product.
pub fn history_table(points: &[CostHistoryPoint], currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:>16} {:>12} {:>16}", "date", "total", "quantity", "cost/unit");
    for point in points {
        let _ = writeln!(
            out,
            "{:<12} {:>16} {:>12} {:>16}",
            point.date,
            format_currency(point.total_cost, currency),
            format_amount(point.quantity),
            format_currency(point.cost_per_unit, currency),
        );
    }
    out
}

/// Pre-save estimate.
pub fn estimate_table(estimate: &LiveEstimate, currency: &str) -> String {
    let lines: [(&str, Decimal); 5] = [
        ("labor", estimate.labor_cost),
        ("supervisor", estimate.supervisor_indirect_cost),
        ("shared indirect", estimate.shared_indirect_cost),
        ("total", estimate.total_cost),
        ("cost/unit", estimate.cost_per_unit),
    ];
    let mut out = String::new();
    for (label, value) in lines {
        let _ = writeln!(out, "{label:<16} {:>16}", format_currency(value, currency));
    }
    out
}

/// Trend summary.
pub fn trend_table(trend: &TrendAnalysis, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<16} {:?}", "direction", trend.direction);
    let _ = writeln!(
        out,
        "{:<16} {:>16}",
        "first half",
        format_currency(trend.first_half_average, currency)
    );
    let _ = writeln!(
        out,
        "{:<16} {:>16}",
        "second half",
        format_currency(trend.second_half_average, currency)
    );
    let _ = writeln!(out, "{:<16} {:>15}%", "change", format_amount(trend.change_percent));
    out
}
