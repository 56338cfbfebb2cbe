//! Property-based tests for cost apportionment.
//!
//! Quantities and rates are whole numbers of cents, so sums and products are
//! exact and only the final divisions introduce rounding.

use chrono::NaiveDate;
use costline_shared::types::{CostCenterId, EmployeeId, LineId, ProductId, ReportId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{
    CostContext, product_average_cost, product_cost_history, product_cost_snapshots,
    report_costs,
};
use crate::cost_center::{
    CostAllocation, CostCenter, CostCenterBook, CostCenterType, CostCenterValue, LineAllocation,
};
use crate::production::ProductionReport;

/// Tolerance for sums of quotients.
fn tolerance() -> Decimal {
    dec!(0.000001)
}

fn config() -> (Vec<CostCenter>, Vec<CostCenterValue>, Vec<CostAllocation>) {
    let lines = ["L1", "L2", "L3"];
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
            amount: dec!(93000),
        }],
        vec![CostAllocation {
            cost_center_id: CostCenterId::new("rent"),
            month: "2024-06".to_string(),
            allocations: lines
                .iter()
                .zip([dec!(50), dec!(30), dec!(20)])
                .map(|(line, percentage)| LineAllocation {
                    line_id: LineId::new(*line),
                    percentage,
                })
                .collect(),
        }],
    )
}

/// (line index, day, product index, workers, hours, quantity)
type ReportSeed = (usize, u32, usize, i64, i64, i64);

fn report_seed() -> impl Strategy<Value = ReportSeed> {
    (0usize..3, 1u32..=5, 0usize..3, 0i64..20, 0i64..12, 0i64..500)
}

fn build_reports(seeds: &[ReportSeed]) -> Vec<ProductionReport> {
    seeds
        .iter()
        .enumerate()
        .map(
            |(i, &(line, day, product, workers, hours, quantity))| ProductionReport {
                id: ReportId::new(format!("r{i}")),
                date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
                line_id: LineId::new(format!("L{}", line + 1)),
                product_id: ProductId::new(format!("P{product}")),
                employee_id: EmployeeId::new(format!("sup-{}", i % 2)),
                workers_count: Decimal::from(workers),
                work_hours: Decimal::from(hours),
                quantity_produced: Decimal::from(quantity),
                quantity_waste: Decimal::ZERO,
                supervisor_indirect_cost: None,
            },
        )
        .collect()
}

fn hourly_rate() -> impl Strategy<Value = Decimal> {
    (0i64..10_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Shares over a line-day add back up to the line's daily overhead.
    #[test]
    fn prop_line_day_overhead_is_conserved(
        seeds in prop::collection::vec(report_seed(), 1..30),
        rate in hourly_rate(),
    ) {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let ctx = CostContext::with_hourly_rate(&book, rate);
        let reports = build_reports(&seeds);

        let costs = report_costs(&reports, &ctx);

        for report in &reports {
            let same_day: Decimal = reports
                .iter()
                .filter(|r| r.line_id == report.line_id && r.date == report.date)
                .filter_map(|r| costs.get(&r.id))
                .map(|c| c.shared_indirect_cost)
                .sum();
            let produced_any = reports
                .iter()
                .any(|r| r.line_id == report.line_id && r.date == report.date
                    && r.quantity_produced > Decimal::ZERO);
            let expected = if produced_any {
                book.daily_indirect_cost(&report.line_id, "2024-06")
            } else {
                Decimal::ZERO
            };
            prop_assert!((same_day - expected).abs() <= tolerance());
        }
    }

    /// Zero-output reports never appear; every other report does.
    #[test]
    fn prop_zero_quantity_reports_excluded(
        seeds in prop::collection::vec(report_seed(), 0..30),
    ) {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let ctx = CostContext::with_hourly_rate(&book, dec!(10));
        let reports = build_reports(&seeds);

        let costs = report_costs(&reports, &ctx);

        for report in &reports {
            let present = costs.contains_key(&report.id);
            prop_assert_eq!(present, report.quantity_produced > Decimal::ZERO);
        }
        for cost in costs.values() {
            prop_assert!(cost.cost_per_unit >= Decimal::ZERO);
        }
    }

    /// The product average reconciles with per-report costs re-weighted by quantity.
    #[test]
    fn prop_average_reconciles_with_report_costs(
        seeds in prop::collection::vec(report_seed(), 1..30),
        rate in hourly_rate(),
    ) {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let ctx = CostContext::with_hourly_rate(&book, rate);
        let reports = build_reports(&seeds);
        let product = ProductId::new("P0");

        let costs = report_costs(&reports, &ctx);
        let average = product_average_cost(&product, &reports, &ctx);

        let (total, quantity) = reports
            .iter()
            .filter(|r| r.product_id == product)
            .filter_map(|r| costs.get(&r.id))
            .fold((Decimal::ZERO, Decimal::ZERO), |(t, q), c| {
                (t + c.total_cost, q + c.quantity_produced)
            });

        prop_assert_eq!(average.quantity_produced, quantity);
        prop_assert!((average.total_cost - total).abs() <= tolerance());
        if quantity > Decimal::ZERO {
            prop_assert!((average.cost_per_unit - total / quantity).abs() <= tolerance());
        } else {
            prop_assert_eq!(average.cost_per_unit, Decimal::ZERO);
        }
    }

    /// The date series and the overall average cover the same output.
    #[test]
    fn prop_history_quantities_match_average(
        seeds in prop::collection::vec(report_seed(), 1..30),
    ) {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let ctx = CostContext::with_hourly_rate(&book, dec!(12.5));
        let reports = build_reports(&seeds);
        let product = ProductId::new("P1");

        let history = product_cost_history(&product, &reports, &ctx);
        let average = product_average_cost(&product, &reports, &ctx);

        let quantity: Decimal = history.iter().map(|p| p.quantity).sum();
        prop_assert_eq!(quantity, average.quantity_produced);
        prop_assert!(history.windows(2).all(|w| w[0].date < w[1].date));
    }

    /// Raising the base rate never lowers any report's cost.
    #[test]
    fn prop_cost_monotonic_in_hourly_rate(
        seeds in prop::collection::vec(report_seed(), 1..20),
        low in hourly_rate(),
        bump in hourly_rate(),
    ) {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let reports = build_reports(&seeds);

        let cheap = report_costs(&reports, &CostContext::with_hourly_rate(&book, low));
        let dear = report_costs(&reports, &CostContext::with_hourly_rate(&book, low + bump));

        for (id, cost) in &cheap {
            prop_assert!(dear[id].total_cost >= cost.total_cost);
        }
    }

    /// Identical inputs give identical outputs.
    #[test]
    fn prop_builders_are_deterministic(
        seeds in prop::collection::vec(report_seed(), 0..20),
        rate in hourly_rate(),
    ) {
        let (centers, values, allocations) = config();
        let book = CostCenterBook::new(&centers, &values, &allocations);
        let ctx = CostContext::with_hourly_rate(&book, rate);
        let reports = build_reports(&seeds);
        let products = [ProductId::new("P0"), ProductId::new("P1"), ProductId::new("P2")];

        prop_assert_eq!(report_costs(&reports, &ctx), report_costs(&reports, &ctx));
        prop_assert_eq!(
            product_cost_snapshots(&products, &reports, "2024-06", &ctx),
            product_cost_snapshots(&products, &reports, "2024-06", &ctx)
        );
    }
}

#[test]
fn test_weighted_average_differs_from_plain_mean() {
    let (centers, values, allocations) = config();
    let book = CostCenterBook::new(&centers, &values, &allocations);
    let ctx = CostContext::with_hourly_rate(&book, dec!(10));
    let reports = build_reports(&[(0, 1, 0, 5, 8, 100), (1, 2, 0, 5, 8, 10)]);

    let costs = report_costs(&reports, &ctx);
    let plain_mean = costs.values().map(|c| c.cost_per_unit).sum::<Decimal>() / dec!(2);
    let average = product_average_cost(&ProductId::new("P0"), &reports, &ctx);

    let total: Decimal = costs.values().map(|c| c.total_cost).sum();
    assert_eq!(average.total_cost, total);
    assert_eq!(average.cost_per_unit, total / dec!(110));
    assert_ne!(average.cost_per_unit, plain_mean);
}
