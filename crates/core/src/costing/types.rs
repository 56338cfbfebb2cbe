//! Derived cost figures produced by the engine.
//!
//! None of these are persisted by the engine; callers format or store them.

use chrono::NaiveDate;
use costline_shared::types::{LineId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `total / quantity` when quantity is positive, otherwise zero.
#[must_use]
pub fn cost_per_unit(total_cost: Decimal, quantity: Decimal) -> Decimal {
    if quantity > Decimal::ZERO {
        total_cost / quantity
    } else {
        Decimal::ZERO
    }
}

/// Labor + indirect cost for a line, a product or a group of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Labor cost.
    pub labor_cost: Decimal,
    /// Indirect (overhead) cost.
    pub indirect_cost: Decimal,
    /// Labor plus indirect.
    pub total_cost: Decimal,
    /// Units produced.
    pub quantity_produced: Decimal,
    /// Total cost per unit, zero when nothing was produced.
    pub cost_per_unit: Decimal,
}

impl CostBreakdown {
    /// Builds a breakdown, deriving total and per-unit cost.
    #[must_use]
    pub fn new(labor_cost: Decimal, indirect_cost: Decimal, quantity_produced: Decimal) -> Self {
        let total_cost = labor_cost + indirect_cost;
        Self {
            labor_cost,
            indirect_cost,
            total_cost,
            quantity_produced,
            cost_per_unit: cost_per_unit(total_cost, quantity_produced),
        }
    }
}

/// Cost snapshot of one line for a day.
pub type LineCostSnapshot = CostBreakdown;

/// Cost snapshot of one product for a day.
pub type ProductCostSnapshot = CostBreakdown;

/// Cost attributed to a single production report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCost {
    /// `workers x hours x base rate`.
    pub labor_cost: Decimal,
    /// Report's share of its line-day overhead.
    pub shared_indirect_cost: Decimal,
    /// Supervisor cost, either stored on the report or `rate x hours`.
    pub supervisor_indirect_cost: Decimal,
    /// Sum of the three components.
    pub total_cost: Decimal,
    /// Units produced (always positive).
    pub quantity_produced: Decimal,
    /// Total cost per unit.
    pub cost_per_unit: Decimal,
}

impl ReportCost {
    /// Builds a report cost, deriving total and per-unit cost.
    #[must_use]
    pub fn new(
        labor_cost: Decimal,
        shared_indirect_cost: Decimal,
        supervisor_indirect_cost: Decimal,
        quantity_produced: Decimal,
    ) -> Self {
        let total_cost = labor_cost + shared_indirect_cost + supervisor_indirect_cost;
        Self {
            labor_cost,
            shared_indirect_cost,
            supervisor_indirect_cost,
            total_cost,
            quantity_produced,
            cost_per_unit: cost_per_unit(total_cost, quantity_produced),
        }
    }

    /// Shared plus supervisor indirect cost.
    #[must_use]
    pub fn indirect_cost(&self) -> Decimal {
        self.shared_indirect_cost + self.supervisor_indirect_cost
    }
}

/// Running totals over report costs; per-unit cost is derived at the end so
/// the result is quantity-weighted.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CostAccumulator {
    labor_cost: Decimal,
    indirect_cost: Decimal,
    quantity: Decimal,
}

impl CostAccumulator {
    pub(crate) fn add(&mut self, cost: &ReportCost) {
        self.labor_cost += cost.labor_cost;
        self.indirect_cost += cost.indirect_cost();
        self.quantity += cost.quantity_produced;
    }

    pub(crate) fn finish(self) -> CostBreakdown {
        CostBreakdown::new(self.labor_cost, self.indirect_cost, self.quantity)
    }
}

/// Cost of a product on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCostRow {
    /// Line ID.
    pub line_id: LineId,
    /// Line display name from the caller's lookup.
    pub line_name: String,
    /// Accumulated cost of the product on this line.
    pub cost: CostBreakdown,
}

/// Cost-per-unit of a product on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostHistoryPoint {
    /// Production date.
    pub date: NaiveDate,
    /// Total cost on that date.
    pub total_cost: Decimal,
    /// Units produced on that date.
    pub quantity: Decimal,
    /// Total cost per unit.
    pub cost_per_unit: Decimal,
}

/// Selection for the calendar chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFilter {
    /// Only this line.
    pub line_id: Option<LineId>,
    /// Only this product.
    pub product_id: Option<ProductId>,
    /// First date included.
    pub from: Option<NaiveDate>,
    /// Last date included.
    pub to: Option<NaiveDate>,
}

impl ChartFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one line.
    #[must_use]
    pub fn with_line(mut self, line_id: LineId) -> Self {
        self.line_id = Some(line_id);
        self
    }

    /// Restricts to one product.
    #[must_use]
    pub fn with_product(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }

    /// Restricts to an inclusive date range.
    #[must_use]
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Returns true if a report on this line/product/date is selected.
    #[must_use]
    pub fn matches(&self, line_id: &LineId, product_id: &ProductId, date: NaiveDate) -> bool {
        self.line_id.as_ref().is_none_or(|l| l == line_id)
            && self.product_id.as_ref().is_none_or(|p| p == product_id)
            && self.from.is_none_or(|from| date >= from)
            && self.to.is_none_or(|to| date <= to)
    }
}

/// One cell of the calendar chart: a line on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Production date.
    pub date: NaiveDate,
    /// Line ID.
    pub line_id: LineId,
    /// Cost of the selected reports on that line-day.
    pub cost: CostBreakdown,
}

/// Unsaved report values from the entry form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveEstimateInput {
    /// Line the report is for.
    pub line_id: LineId,
    /// Report date; the current month is used when absent.
    pub report_date: Option<NaiveDate>,
    /// Workers on the shift.
    pub workers_count: Decimal,
    /// Hours worked per worker.
    pub work_hours: Decimal,
    /// Units produced.
    pub quantity_produced: Decimal,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Supervisor's own rate, if any.
    pub supervisor_rate: Option<Decimal>,
}

/// Projected cost of an unsaved report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveEstimate {
    /// Labor cost.
    pub labor_cost: Decimal,
    /// Supervisor cost.
    pub supervisor_indirect_cost: Decimal,
    /// Line overhead for the day.
    pub shared_indirect_cost: Decimal,
    /// Sum of the components.
    pub total_cost: Decimal,
    /// Total cost per unit.
    pub cost_per_unit: Decimal,
}

/// Direction of a cost-per-unit series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Second half costs more than the first.
    Rising,
    /// Second half costs less than the first.
    Falling,
    /// Change within the threshold.
    Stable,
    /// Fewer than two points.
    InsufficientData,
}

/// First-half versus second-half comparison of a cost history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    /// Classified direction.
    pub direction: TrendDirection,
    /// Mean cost-per-unit of the first half.
    pub first_half_average: Decimal,
    /// Mean cost-per-unit of the second half.
    pub second_half_average: Decimal,
    /// Relative change in percent (zero when the first half averages zero).
    pub change_percent: Decimal,
}
