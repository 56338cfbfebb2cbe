//! Today's cost snapshots per line and per product.

use std::collections::{BTreeMap, HashMap};

use costline_shared::types::{LineId, ProductId};
use rust_decimal::Decimal;
use tracing::debug;

use super::context::CostContext;
use super::types::{CostBreakdown, LineCostSnapshot, ProductCostSnapshot};
use crate::production::{ProductionReport, daily_labor_cost};

/// Labor plus indirect cost of each requested line over today's reports.
///
/// A line that ran nothing today still carries its daily overhead, with a
/// zero cost-per-unit.
#[must_use]
pub fn line_cost_snapshots(
    line_ids: &[LineId],
    todays_reports: &[ProductionReport],
    month: &str,
    ctx: &CostContext<'_>,
) -> BTreeMap<LineId, LineCostSnapshot> {
    let book = ctx.book();

    line_ids
        .iter()
        .map(|line_id| {
            let reports: Vec<&ProductionReport> = todays_reports
                .iter()
                .filter(|r| r.line_id == *line_id)
                .collect();

            let labor_cost = daily_labor_cost(reports.iter().copied(), ctx.hourly_rate());
            let indirect_cost = book.daily_indirect_cost(line_id, month);
            let quantity: Decimal = reports.iter().map(|r| r.produced()).sum();

            (
                line_id.clone(),
                CostBreakdown::new(labor_cost, indirect_cost, quantity),
            )
        })
        .collect()
}

/// Labor plus indirect cost of each requested product over today's reports.
///
/// Each line's daily overhead is split across the products that ran on it,
/// weighted by quantity: a product's share is
/// `line cost x product quantity on line / line quantity today`. Products
/// with no reports today get an all-zero snapshot.
#[must_use]
pub fn product_cost_snapshots(
    product_ids: &[ProductId],
    todays_reports: &[ProductionReport],
    month: &str,
    ctx: &CostContext<'_>,
) -> BTreeMap<ProductId, ProductCostSnapshot> {
    let book = ctx.book();

    let mut line_totals: HashMap<&LineId, Decimal> = HashMap::new();
    for report in todays_reports {
        *line_totals.entry(&report.line_id).or_default() += report.produced();
    }
    let mut line_costs: HashMap<&LineId, Decimal> = HashMap::new();

    let snapshots: BTreeMap<ProductId, ProductCostSnapshot> = product_ids
        .iter()
        .map(|product_id| {
            let reports: Vec<&ProductionReport> = todays_reports
                .iter()
                .filter(|r| r.product_id == *product_id)
                .collect();
            if reports.is_empty() {
                return (product_id.clone(), CostBreakdown::default());
            }

            let labor_cost = daily_labor_cost(reports.iter().copied(), ctx.hourly_rate());

            let mut quantity_by_line: BTreeMap<&LineId, Decimal> = BTreeMap::new();
            for report in &reports {
                *quantity_by_line.entry(&report.line_id).or_default() += report.produced();
            }

            let mut indirect_cost = Decimal::ZERO;
            let mut quantity = Decimal::ZERO;
            for (line_id, line_quantity) in quantity_by_line {
                quantity += line_quantity;
                let line_total = line_totals.get(line_id).copied().unwrap_or_default();
                if line_total <= Decimal::ZERO {
                    continue;
                }
                let line_cost = *line_costs
                    .entry(line_id)
                    .or_insert_with(|| book.daily_indirect_cost(line_id, month));
                indirect_cost += line_cost * line_quantity / line_total;
            }

            (
                product_id.clone(),
                CostBreakdown::new(labor_cost, indirect_cost, quantity),
            )
        })
        .collect();

    debug!(
        products = snapshots.len(),
        lines = line_costs.len(),
        month,
        "computed product cost snapshots"
    );
    snapshots
}
