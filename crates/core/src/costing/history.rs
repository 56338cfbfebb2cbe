//! Historical views of a product's cost.
//!
//! All builders take the whole report batch (every product) so that line-day
//! totals are complete, then accumulate only the requested product's reports.
//! Figures are quantity-weighted: a report producing more units moves the
//! result proportionally more.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use costline_shared::types::{LineId, ProductId};
use rust_decimal::Decimal;

use super::context::CostContext;
use super::ledger::LineDayLedger;
use super::types::{
    CostAccumulator, CostBreakdown, CostHistoryPoint, LineCostRow, cost_per_unit,
};
use crate::production::ProductionReport;

/// Quantity-weighted average cost of a product across a batch.
///
/// Labor, indirect (shared plus supervisor) and quantity are summed over the
/// product's reports and divided once at the end.
#[must_use]
pub fn product_average_cost(
    product_id: &ProductId,
    reports: &[ProductionReport],
    ctx: &CostContext<'_>,
) -> CostBreakdown {
    let mut ledger = LineDayLedger::new(reports, *ctx);
    let mut total = CostAccumulator::default();

    for report in reports.iter().filter(|r| r.product_id == *product_id) {
        if let Some(cost) = ledger.report_cost(report) {
            total.add(&cost);
        }
    }

    total.finish()
}

/// Cost of a product broken down by the lines it was produced on.
///
/// One row per line, ordered by line ID. `line_name` labels the rows and
/// plays no part in the figures.
#[must_use]
pub fn product_cost_by_line<F>(
    product_id: &ProductId,
    reports: &[ProductionReport],
    ctx: &CostContext<'_>,
    line_name: F,
) -> Vec<LineCostRow>
where
    F: Fn(&LineId) -> String,
{
    let mut ledger = LineDayLedger::new(reports, *ctx);
    let mut by_line: BTreeMap<&LineId, CostAccumulator> = BTreeMap::new();

    for report in reports.iter().filter(|r| r.product_id == *product_id) {
        if let Some(cost) = ledger.report_cost(report) {
            by_line.entry(&report.line_id).or_default().add(&cost);
        }
    }

    by_line
        .into_iter()
        .map(|(line_id, acc)| LineCostRow {
            line_id: line_id.clone(),
            line_name: line_name(line_id),
            cost: acc.finish(),
        })
        .collect()
}

/// Cost-per-unit of a product per production date, oldest first.
///
/// Each report's overhead share comes from its own line-day total, exactly as
/// in per-report apportionment, so the series agrees with per-report figures.
#[must_use]
pub fn product_cost_history(
    product_id: &ProductId,
    reports: &[ProductionReport],
    ctx: &CostContext<'_>,
) -> Vec<CostHistoryPoint> {
    let mut ledger = LineDayLedger::new(reports, *ctx);
    let mut by_date: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();

    for report in reports.iter().filter(|r| r.product_id == *product_id) {
        if let Some(cost) = ledger.report_cost(report) {
            let (total_cost, quantity) = by_date.entry(report.date).or_default();
            *total_cost += cost.total_cost;
            *quantity += cost.quantity_produced;
        }
    }

    by_date
        .into_iter()
        .map(|(date, (total_cost, quantity))| CostHistoryPoint {
            date,
            total_cost,
            quantity,
            cost_per_unit: cost_per_unit(total_cost, quantity),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost_center::{
        CostAllocation, CostCenter, CostCenterBook, CostCenterType, CostCenterValue,
        LineAllocation,
    };
    use costline_shared::types::{CostCenterId, EmployeeId, ReportId};
    use rust_decimal_macros::dec;

    fn config() -> (Vec<CostCenter>, Vec<CostCenterValue>, Vec<CostAllocation>) {
        (
            vec![CostCenter {
                id: CostCenterId::new("rent"),
                name: "Rent".to_string(),
                center_type: CostCenterType::Indirect,
                is_active: true,
            }],
            vec![CostCenterValue {
                cost_center_id: CostCenterId::new("rent"),
                month: "2024-06".to_string(),
                amount: dec!(30000),
            }],
            vec![CostAllocation {
                cost_center_id: CostCenterId::new("rent"),
                month: "2024-06".to_string(),
                allocations: vec![
                    LineAllocation {
                        line_id: LineId::new("L1"),
                        percentage: dec!(50),
                    },
                    LineAllocation {
                        line_id: LineId::new("L2"),
                        percentage: dec!(10),
                    },
                ],
            }],
        )
    }

    fn report(
        id: &str,
        day: u32,
        line: &str,
        product: &str,
        quantity: Decimal,
    ) -> ProductionReport {
        ProductionReport {
            id: ReportId::new(id),
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            line_id: LineId::new(line),
            product_id: ProductId::new(product),
            employee_id: EmployeeId::new("sup-1"),
            workers_count: dec!(5),
            work_hours: dec!(8),
            quantity_produced: quantity,
            quantity_waste: Decimal::ZERO,
            supervisor_indirect_cost: None,
        }
    }

    fn batch() -> Vec<ProductionReport> {
        vec![
            report("a1", 3, "L1", "A", dec!(80)),
            report("b1", 3, "L1", "B", dec!(20)),
            report("a2", 4, "L1", "A", dec!(20)),
            report("a3", 4, "L2", "A", dec!(10)),
        ]
    }

    #[test]
    fn test_average_cost_is_quantity_weighted() {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let ctx = CostContext::with_hourly_rate(&book, Decimal::ZERO);
        let reports = batch();

        let average = product_average_cost(&ProductId::new("A"), &reports, &ctx);

        // Day 3: 400 of L1's 500. Day 4: all of L1 (500) and all of L2 (100).
        assert_eq!(average.indirect_cost, dec!(1000));
        assert_eq!(average.quantity_produced, dec!(110));
        assert_eq!(average.cost_per_unit, dec!(1000) / dec!(110));
    }

    #[test]
    fn test_average_cost_of_unknown_product_is_zero() {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let ctx = CostContext::with_hourly_rate(&book, dec!(10));

        let average = product_average_cost(&ProductId::new("Z"), &batch(), &ctx);
        assert_eq!(average, CostBreakdown::default());
    }

    #[test]
    fn test_cost_by_line_rows() {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let ctx = CostContext::with_hourly_rate(&book, dec!(10));

        let rows = product_cost_by_line(&ProductId::new("A"), &batch(), &ctx, |line| {
            format!("Line {line}")
        });

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line_id, LineId::new("L1"));
        assert_eq!(rows[0].line_name, "Line L1");
        assert_eq!(rows[0].cost.quantity_produced, dec!(100));
        assert_eq!(rows[1].line_id, LineId::new("L2"));
        assert_eq!(rows[1].cost.quantity_produced, dec!(10));
        // Labor: 5 x 8 x 10 per report.
        assert_eq!(rows[0].cost.labor_cost, dec!(800));
        assert_eq!(rows[1].cost.labor_cost, dec!(400));
    }

    #[test]
    fn test_history_sorted_by_date() {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let ctx = CostContext::with_hourly_rate(&book, Decimal::ZERO);
        let mut reports = batch();
        reports.reverse();

        let history = product_cost_history(&ProductId::new("A"), &reports, &ctx);

        assert_eq!(history.len(), 2);
        assert!(history[0].date < history[1].date);
        assert_eq!(history[0].quantity, dec!(80));
        assert_eq!(history[0].cost_per_unit, dec!(5));
        assert_eq!(history[1].quantity, dec!(30));
        assert_eq!(history[1].total_cost, dec!(600));
        assert_eq!(history[1].cost_per_unit, dec!(20));
    }

    #[test]
    fn test_history_skips_zero_quantity() {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let ctx = CostContext::with_hourly_rate(&book, dec!(10));
        let reports = vec![report("a", 3, "L1", "A", Decimal::ZERO)];

        assert!(product_cost_history(&ProductId::new("A"), &reports, &ctx).is_empty());
    }
}
