//! Line-day grouping shared by every historical builder.
//!
//! A line's daily overhead is split across the reports filed on that line
//! that day, weighted by quantity produced. The ledger computes the line-day
//! totals once per batch and memoizes each (line, month) indirect cost, so
//! per-report costs, product averages, per-line breakdowns, date series and
//! the calendar chart all use the same grouping key.

use std::collections::HashMap;

use chrono::NaiveDate;
use costline_shared::types::LineId;
use rust_decimal::Decimal;

use super::context::CostContext;
use super::types::ReportCost;
use crate::production::{ProductionReport, report_labor_cost};

/// Call-scoped grouping of a report batch by (line, date).
pub(crate) struct LineDayLedger<'r, 'c> {
    ctx: CostContext<'c>,
    totals: HashMap<(&'r LineId, NaiveDate), Decimal>,
    indirect: HashMap<(&'r LineId, String), Decimal>,
}

impl<'r, 'c> LineDayLedger<'r, 'c> {
    /// Groups the whole batch; every report counts toward its line-day total.
    pub(crate) fn new(reports: &'r [ProductionReport], ctx: CostContext<'c>) -> Self {
        let mut totals: HashMap<(&LineId, NaiveDate), Decimal> = HashMap::new();
        for report in reports {
            *totals.entry((&report.line_id, report.date)).or_default() += report.produced();
        }

        Self {
            ctx,
            totals,
            indirect: HashMap::new(),
        }
    }

    /// Number of distinct line-days in the batch.
    pub(crate) fn line_day_count(&self) -> usize {
        self.totals.len()
    }

    /// Quantity produced on a line on a date across the batch.
    pub(crate) fn line_day_total(&self, line_id: &'r LineId, date: NaiveDate) -> Decimal {
        self.totals
            .get(&(line_id, date))
            .copied()
            .unwrap_or_default()
    }

    /// Daily indirect cost of a line for a month, resolved once per batch.
    pub(crate) fn line_indirect_cost(&mut self, line_id: &'r LineId, month: String) -> Decimal {
        let book = self.ctx.book();
        *self
            .indirect
            .entry((line_id, month))
            .or_insert_with_key(|(line_id, month)| book.daily_indirect_cost(line_id, month))
    }

    /// Report's quantity-weighted share of its line-day overhead.
    pub(crate) fn shared_indirect_share(&mut self, report: &'r ProductionReport) -> Decimal {
        let quantity = report.produced();
        let line_day_total = self.line_day_total(&report.line_id, report.date);
        if quantity <= Decimal::ZERO || line_day_total <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let line_cost = self.line_indirect_cost(&report.line_id, report.month_key());
        line_cost * quantity / line_day_total
    }

    /// Full cost of a report, or `None` when it produced nothing.
    pub(crate) fn report_cost(&mut self, report: &'r ProductionReport) -> Option<ReportCost> {
        let quantity = report.produced();
        if quantity <= Decimal::ZERO {
            return None;
        }

        let base_rate = self.ctx.hourly_rate();
        let labor_cost = report_labor_cost(report, base_rate);
        let supervisor_cost = report.cached_supervisor_cost().unwrap_or_else(|| {
            self.ctx
                .overrides()
                .effective_rate(&report.employee_id, base_rate)
                * report.hours()
        });
        let shared_cost = self.shared_indirect_share(report);

        Some(ReportCost::new(
            labor_cost,
            shared_cost,
            supervisor_cost,
            quantity,
        ))
    }
}
