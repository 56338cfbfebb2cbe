//! Direction of a cost-per-unit history.

use rust_decimal::Decimal;

use super::types::{CostHistoryPoint, TrendAnalysis, TrendDirection};

/// Compares the mean cost-per-unit of the first half of a series with the
/// second half.
///
/// With an odd number of points the middle one belongs to the second half.
/// A relative change whose magnitude is within `threshold_percent` is
/// `Stable`. When the first half averages zero no percentage can be formed;
/// the change is reported as zero and any positive second half is `Rising`.
///
/// ```
/// use chrono::NaiveDate;
/// use costline_core::costing::{CostHistoryPoint, TrendDirection, trend_direction};
/// use rust_decimal::Decimal;
///
/// let point = |day, cpu| CostHistoryPoint {
///     date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
///     total_cost: cpu,
///     quantity: Decimal::ONE,
///     cost_per_unit: cpu,
/// };
/// let series = [point(1, Decimal::from(10)), point(2, Decimal::from(12))];
///
/// let trend = trend_direction(&series, Decimal::from(5));
/// assert_eq!(trend.direction, TrendDirection::Rising);
/// assert_eq!(trend.change_percent, Decimal::from(20));
/// ```
#[must_use]
pub fn trend_direction(series: &[CostHistoryPoint], threshold_percent: Decimal) -> TrendAnalysis {
    if series.len() < 2 {
        return TrendAnalysis {
            direction: TrendDirection::InsufficientData,
            first_half_average: Decimal::ZERO,
            second_half_average: Decimal::ZERO,
            change_percent: Decimal::ZERO,
        };
    }

    let (first, second) = series.split_at(series.len() / 2);
    let first_half_average = mean_cost_per_unit(first);
    let second_half_average = mean_cost_per_unit(second);
    let threshold = threshold_percent.abs();

    let (direction, change_percent) = if first_half_average.is_zero() {
        let direction = if second_half_average > Decimal::ZERO {
            TrendDirection::Rising
        } else {
            TrendDirection::Stable
        };
        (direction, Decimal::ZERO)
    } else {
        let change = (second_half_average - first_half_average) / first_half_average
            * Decimal::ONE_HUNDRED;
        let direction = if change.abs() <= threshold {
            TrendDirection::Stable
        } else if change > Decimal::ZERO {
            TrendDirection::Rising
        } else {
            TrendDirection::Falling
        };
        (direction, change)
    };

    TrendAnalysis {
        direction,
        first_half_average,
        second_half_average,
        change_percent,
    }
}

fn mean_cost_per_unit(points: &[CostHistoryPoint]) -> Decimal {
    if points.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = points.iter().map(|p| p.cost_per_unit).sum();
    sum / Decimal::from(points.len())
}
