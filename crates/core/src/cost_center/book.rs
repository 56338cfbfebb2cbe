//! Indexed view over cost-center configuration.
//!
//! Resolving a line's indirect cost is the single allocation primitive of the
//! engine: every snapshot, apportionment and estimate goes through
//! [`CostCenterBook::daily_indirect_cost`], so all of them agree on the figure
//! for a given line and month.
//!
//! Resolution never fails. A missing monthly value, a missing allocation
//! table, an unlisted line, a non-positive percentage or a malformed month key
//! all make the affected center contribute zero.

use std::collections::HashMap;

use costline_shared::types::{CostCenterId, LineId};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::types::{AllocatedCost, CostAllocation, CostCenter, CostCenterValue};
use crate::calendar;

/// Read-only index over cost centers, monthly values and allocation tables.
///
/// Built once per request from already-fetched collections. When two records
/// share a key (center + month) the first one wins.
#[derive(Debug, Clone, Default)]
pub struct CostCenterBook<'a> {
    centers: Vec<&'a CostCenter>,
    values: HashMap<&'a CostCenterId, HashMap<&'a str, Decimal>>,
    allocations: HashMap<&'a CostCenterId, HashMap<&'a str, &'a CostAllocation>>,
}

impl<'a> CostCenterBook<'a> {
    /// Indexes the three configuration collections.
    ///
    /// Only active indirect centers are retained; direct and inactive centers
    /// never take part in allocation.
    #[must_use]
    pub fn new(
        centers: &'a [CostCenter],
        values: &'a [CostCenterValue],
        allocations: &'a [CostAllocation],
    ) -> Self {
        let centers: Vec<&CostCenter> = centers.iter().filter(|c| c.is_allocatable()).collect();

        let mut value_index: HashMap<&CostCenterId, HashMap<&str, Decimal>> = HashMap::new();
        for value in values {
            value_index
                .entry(&value.cost_center_id)
                .or_default()
                .entry(value.month.as_str())
                .or_insert(value.amount);
        }

        let mut allocation_index: HashMap<&CostCenterId, HashMap<&str, &CostAllocation>> =
            HashMap::new();
        for allocation in allocations {
            allocation_index
                .entry(&allocation.cost_center_id)
                .or_default()
                .entry(allocation.month.as_str())
                .or_insert(allocation);
        }

        Self {
            centers,
            values: value_index,
            allocations: allocation_index,
        }
    }

    /// Number of centers that can contribute indirect cost.
    #[must_use]
    pub fn allocatable_center_count(&self) -> usize {
        self.centers.len()
    }

    /// Monthly amount booked to a center, if any.
    #[must_use]
    pub fn monthly_value(&self, center_id: &CostCenterId, month: &str) -> Option<Decimal> {
        self.values.get(center_id)?.get(month).copied()
    }

    /// Allocation table of a center for a month, if any.
    #[must_use]
    pub fn allocation(&self, center_id: &CostCenterId, month: &str) -> Option<&'a CostAllocation> {
        self.allocations.get(center_id)?.get(month).copied()
    }

    /// Every center contributing to a line's overhead in a month.
    ///
    /// Centers are listed in configuration order. Each entry carries
    /// `amount * percentage / 100`; percentages are applied independently per
    /// center and are not normalized across lines.
    #[must_use]
    pub fn line_allocations(&self, line_id: &LineId, month: &str) -> Vec<AllocatedCost> {
        let mut contributions = Vec::new();

        for center in &self.centers {
            let Some(amount) = self.monthly_value(&center.id, month) else {
                trace!(cost_center = %center.id, month, "no monthly value, skipping center");
                continue;
            };
            if amount <= Decimal::ZERO {
                trace!(cost_center = %center.id, month, %amount, "non-positive amount, skipping center");
                continue;
            }

            let Some(allocation) = self.allocation(&center.id, month) else {
                trace!(cost_center = %center.id, month, "no allocation table, skipping center");
                continue;
            };
            let Some(percentage) = allocation.percentage_for(line_id) else {
                trace!(cost_center = %center.id, line = %line_id, month, "line not allocated");
                continue;
            };
            if percentage <= Decimal::ZERO {
                trace!(cost_center = %center.id, line = %line_id, %percentage, "non-positive percentage");
                continue;
            }

            contributions.push(AllocatedCost {
                cost_center_id: center.id.clone(),
                cost_center_name: center.name.clone(),
                monthly_amount: amount,
                percentage,
                allocated_amount: amount * percentage / Decimal::ONE_HUNDRED,
            });
        }

        contributions
    }

    /// Indirect cost allocated to a line for a whole month.
    #[must_use]
    pub fn monthly_indirect_cost(&self, line_id: &LineId, month: &str) -> Decimal {
        self.line_allocations(line_id, month)
            .iter()
            .map(|c| c.allocated_amount)
            .sum()
    }

    /// Indirect cost allocated to a line for one day of a month.
    ///
    /// Monthly allocated total divided by the number of days in the month.
    /// A malformed month key yields zero.
    #[must_use]
    pub fn daily_indirect_cost(&self, line_id: &LineId, month: &str) -> Decimal {
        let days = calendar::days_in_month(month);
        if days == 0 {
            debug!(line = %line_id, month, "malformed month key, indirect cost is zero");
            return Decimal::ZERO;
        }

        self.monthly_indirect_cost(line_id, month) / Decimal::from(days)
    }
}
