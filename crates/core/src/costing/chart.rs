//! Calendar chart: cost per line per date, with line/product/date filters.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use costline_shared::types::LineId;

use super::context::CostContext;
use super::ledger::LineDayLedger;
use super::types::{ChartFilter, ChartPoint, CostAccumulator};
use crate::production::ProductionReport;

/// Builds chart points keyed by (date, line), sorted by date then line.
///
/// Line-day totals are taken from the unfiltered batch before the filter is
/// applied, so selecting one product never hands it the overhead of products
/// that shared its line that day.
#[must_use]
pub fn cost_chart(
    reports: &[ProductionReport],
    filter: &ChartFilter,
    ctx: &CostContext<'_>,
) -> Vec<ChartPoint> {
    let mut ledger = LineDayLedger::new(reports, *ctx);
    let mut cells: BTreeMap<(NaiveDate, &LineId), CostAccumulator> = BTreeMap::new();

    let selected = reports
        .iter()
        .filter(|r| filter.matches(&r.line_id, &r.product_id, r.date));
    for report in selected {
        if let Some(cost) = ledger.report_cost(report) {
            cells
                .entry((report.date, &report.line_id))
                .or_default()
                .add(&cost);
        }
    }

    cells
        .into_iter()
        .map(|((date, line_id), acc)| ChartPoint {
            date,
            line_id: line_id.clone(),
            cost: acc.finish(),
        })
        .collect()
}
