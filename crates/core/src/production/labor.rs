//! Labor cost calculation.

use rust_decimal::Decimal;

use super::types::{ProductionReport, non_negative};

/// Labor cost of a single report: `workers x hours x rate`.
#[must_use]
pub fn report_labor_cost(report: &ProductionReport, hourly_rate: Decimal) -> Decimal {
    report.worker_hours() * non_negative(hourly_rate)
}

/// Labor cost of a set of reports: `sum(workers x hours) x rate`.
///
/// Negative fields count as zero.
///
/// ```
/// use costline_core::production::{ProductionReport, daily_labor_cost};
/// use rust_decimal::Decimal;
///
/// let reports: Vec<ProductionReport> = Vec::new();
/// assert_eq!(daily_labor_cost(&reports, Decimal::TEN), Decimal::ZERO);
/// ```
#[must_use]
pub fn daily_labor_cost<'r, I>(reports: I, hourly_rate: Decimal) -> Decimal
where
    I: IntoIterator<Item = &'r ProductionReport>,
{
    let worker_hours: Decimal = reports
        .into_iter()
        .map(ProductionReport::worker_hours)
        .sum();
    worker_hours * non_negative(hourly_rate)
}
