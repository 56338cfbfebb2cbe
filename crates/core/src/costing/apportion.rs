//! Per-report cost apportionment over an arbitrary batch.

use std::collections::BTreeMap;

use costline_shared::types::ReportId;
use tracing::debug;

use super::context::CostContext;
use super::ledger::LineDayLedger;
use super::types::ReportCost;
use crate::production::ProductionReport;

/// Cost-per-unit of every report in a batch.
///
/// The batch may span many dates and months. Line-day totals are taken over
/// the whole batch, so a report's overhead share depends on every other
/// report filed on the same line that day. A report carrying a positive
/// stored `supervisor_indirect_cost` keeps that figure; otherwise it is
/// recomputed as `effective rate x work hours`.
///
/// Reports that produced nothing are absent from the result: their unit
/// cost is undefined, not zero.
#[must_use]
pub fn report_costs(
    reports: &[ProductionReport],
    ctx: &CostContext<'_>,
) -> BTreeMap<ReportId, ReportCost> {
    let mut ledger = LineDayLedger::new(reports, *ctx);

    let costs: BTreeMap<ReportId, ReportCost> = reports
        .iter()
        .filter_map(|report| {
            ledger
                .report_cost(report)
                .map(|cost| (report.id.clone(), cost))
        })
        .collect();

    debug!(
        reports = reports.len(),
        costed = costs.len(),
        line_days = ledger.line_day_count(),
        "apportioned report costs"
    );
    costs
}
