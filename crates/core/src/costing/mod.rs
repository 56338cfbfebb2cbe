//! Cost aggregation over production reports.
//!
//! Two families of builders live here:
//!
//! - **Snapshots** cost one day: every line's labor and overhead, and every
//!   product's share of the overhead of the lines it ran on.
//! - **Historical builders** take a batch spanning any number of days and
//!   split each line-day's overhead across the reports filed on it, weighted
//!   by quantity produced. Per-report costs, product averages, per-line
//!   breakdowns, date series and the calendar chart all share that grouping.
//!
//! Every builder borrows its inputs and is deterministic; memoized line costs
//! live only for the duration of one call.

pub mod apportion;
pub mod chart;
pub mod context;
pub mod estimate;
pub mod history;
mod ledger;
pub mod snapshot;
pub mod trend;
pub mod types;

#[cfg(test)]
mod tests;

pub use apportion::report_costs;
pub use chart::cost_chart;
pub use context::CostContext;
pub use estimate::{live_estimate, live_estimate_at};
pub use history::{product_average_cost, product_cost_by_line, product_cost_history};
pub use snapshot::{line_cost_snapshots, product_cost_snapshots};
pub use trend::trend_direction;
pub use types::{
    ChartFilter, ChartPoint, CostBreakdown, CostHistoryPoint, LineCostRow, LineCostSnapshot,
    LiveEstimate, LiveEstimateInput, ProductCostSnapshot, ReportCost, TrendAnalysis,
    TrendDirection, cost_per_unit,
};
