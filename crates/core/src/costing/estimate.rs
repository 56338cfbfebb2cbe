//! Pre-save preview of a report's cost.

use rust_decimal::Decimal;
use tracing::trace;

use super::types::{LiveEstimate, LiveEstimateInput, cost_per_unit};
use crate::calendar::{current_month_key, month_key};
use crate::cost_center::CostCenterBook;
use crate::production::types::non_negative;

/// Projected cost of an unsaved report, using the current month when the
/// input carries no date.
#[must_use]
pub fn live_estimate(input: &LiveEstimateInput, book: &CostCenterBook<'_>) -> LiveEstimate {
    live_estimate_at(input, book, &current_month_key())
}

/// Projected cost of an unsaved report.
///
/// The hypothetical report is treated as alone on its line-day, so it
/// carries the line's whole daily overhead. The supervisor addend uses the
/// supplied supervisor rate when positive, otherwise the base rate. Returns
/// all zeros when nothing would be produced.
#[must_use]
pub fn live_estimate_at(
    input: &LiveEstimateInput,
    book: &CostCenterBook<'_>,
    fallback_month: &str,
) -> LiveEstimate {
    let quantity = non_negative(input.quantity_produced);
    if quantity <= Decimal::ZERO {
        return LiveEstimate::default();
    }

    let hours = non_negative(input.work_hours);
    let hourly_rate = non_negative(input.hourly_rate);
    let labor_cost = non_negative(input.workers_count) * hours * hourly_rate;

    let supervisor_rate = input
        .supervisor_rate
        .filter(|rate| *rate > Decimal::ZERO)
        .unwrap_or(hourly_rate);
    let supervisor_indirect_cost = supervisor_rate * hours;

    let month = input
        .report_date
        .map_or_else(|| fallback_month.to_string(), month_key);
    let shared_indirect_cost = book.daily_indirect_cost(&input.line_id, &month);

    let total_cost = labor_cost + supervisor_indirect_cost + shared_indirect_cost;
    trace!(line_id = %input.line_id, %month, %total_cost, "live estimate");

    LiveEstimate {
        labor_cost,
        supervisor_indirect_cost,
        shared_indirect_cost,
        total_cost,
        cost_per_unit: cost_per_unit(total_cost, quantity),
    }
}
