//! Cost-center configuration records.
//!
//! These mirror the documents kept by the configuration screens. The engine
//! only ever reads them.

use costline_shared::types::{CostCenterId, LineId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cost center classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCenterType {
    /// Cost tied directly to a line or product; never allocated.
    Direct,
    /// Overhead split across lines by configured percentage.
    Indirect,
}

/// A named bucket of cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCenter {
    /// Cost center ID.
    pub id: CostCenterId,
    /// Display name.
    pub name: String,
    /// Direct or indirect.
    #[serde(rename = "type")]
    pub center_type: CostCenterType,
    /// Inactive centers are ignored by allocation.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CostCenter {
    /// Returns true if this center takes part in indirect allocation.
    #[must_use]
    pub fn is_allocatable(&self) -> bool {
        self.is_active && self.center_type == CostCenterType::Indirect
    }
}

/// Total overhead booked to a cost center for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCenterValue {
    /// Cost center the amount belongs to.
    pub cost_center_id: CostCenterId,
    /// Month key (`"YYYY-MM"`).
    pub month: String,
    /// Monthly amount.
    pub amount: Decimal,
}

/// Share of a cost center's monthly amount attributed to one line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAllocation {
    /// Receiving production line.
    pub line_id: LineId,
    /// Percentage of the monthly amount (0-100, not normalized across lines).
    pub percentage: Decimal,
}

/// How a cost center's monthly amount is split across lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAllocation {
    /// Cost center being split.
    pub cost_center_id: CostCenterId,
    /// Month key (`"YYYY-MM"`).
    pub month: String,
    /// Per-line percentages.
    #[serde(default)]
    pub allocations: Vec<LineAllocation>,
}

impl CostAllocation {
    /// Percentage configured for a line, if the line is listed.
    #[must_use]
    pub fn percentage_for(&self, line_id: &LineId) -> Option<Decimal> {
        self.allocations
            .iter()
            .find(|entry| entry.line_id == *line_id)
            .map(|entry| entry.percentage)
    }
}

/// One cost center's contribution to a line's monthly overhead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedCost {
    /// Contributing cost center.
    pub cost_center_id: CostCenterId,
    /// Cost center display name.
    pub cost_center_name: String,
    /// Center's total amount for the month.
    pub monthly_amount: Decimal,
    /// Percentage applied for the line.
    pub percentage: Decimal,
    /// `monthly_amount * percentage / 100`.
    pub allocated_amount: Decimal,
}
