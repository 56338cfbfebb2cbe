//! Factory snapshot: every collection the engine reads, loaded from one JSON file.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::NaiveDate;
use costline_core::CostCenterBook;
use costline_core::cost_center::{CostAllocation, CostCenter, CostCenterValue};
use costline_core::production::{LaborSettings, ProductionReport, RateOverrides};
use costline_shared::types::{EmployeeId, LineId, ProductId};
use costline_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info};

/// Read-only inputs for one run.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Cost centers.
    #[serde(default)]
    pub cost_centers: Vec<CostCenter>,
    /// Monthly amounts per center.
    #[serde(default)]
    pub cost_center_values: Vec<CostCenterValue>,
    /// Monthly line allocations per center.
    #[serde(default)]
    pub cost_allocations: Vec<CostAllocation>,
    /// Production reports.
    #[serde(default)]
    pub production_reports: Vec<ProductionReport>,
    /// Base hourly rate; absent means the configured default.
    #[serde(default)]
    pub labor_settings: Option<LaborSettings>,
    /// Per-employee hourly rates.
    #[serde(default)]
    pub employee_rates: BTreeMap<EmployeeId, Decimal>,
    /// Display names for lines.
    #[serde(default)]
    pub line_names: BTreeMap<LineId, String>,
}

impl Snapshot {
    /// Reads and parses a snapshot file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("{}: {e}", path.display())))?;
        let snapshot = Self::from_json(&raw)?;

        info!(
            path = %path.display(),
            cost_centers = snapshot.cost_centers.len(),
            reports = snapshot.production_reports.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Parses a snapshot document.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Indexed cost-center configuration.
    pub fn book(&self) -> CostCenterBook<'_> {
        CostCenterBook::new(
            &self.cost_centers,
            &self.cost_center_values,
            &self.cost_allocations,
        )
    }

    /// Base hourly rate: command line first, then labor settings, then the
    /// configured default.
    pub fn hourly_rate(&self, cli_rate: Option<Decimal>, default_rate: Decimal) -> Decimal {
        cli_rate
            .or_else(|| self.labor_settings.as_ref().map(|s| s.hourly_rate))
            .unwrap_or(default_rate)
            .max(Decimal::ZERO)
    }

    /// Employee rate overrides.
    pub fn rate_overrides(&self) -> RateOverrides {
        self.employee_rates
            .iter()
            .map(|(employee, rate)| (employee.clone(), *rate))
            .collect()
    }

    /// Reports filed within an inclusive date range.
    pub fn reports_between(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<ProductionReport> {
        let reports: Vec<ProductionReport> = self
            .production_reports
            .iter()
            .filter(|r| from.is_none_or(|from| r.date >= from) && to.is_none_or(|to| r.date <= to))
            .cloned()
            .collect();
        debug!(
            total = self.production_reports.len(),
            selected = reports.len(),
            "selected reports"
        );
        reports
    }

    /// Reports filed on one date.
    pub fn reports_on(&self, date: NaiveDate) -> Vec<ProductionReport> {
        self.reports_between(Some(date), Some(date))
    }

    /// Every line named anywhere in the snapshot, sorted.
    pub fn line_ids(&self) -> Vec<LineId> {
        let mut lines: BTreeSet<LineId> = self.line_names.keys().cloned().collect();
        lines.extend(
            self.cost_allocations
                .iter()
                .flat_map(|a| a.allocations.iter().map(|l| l.line_id.clone())),
        );
        lines.extend(self.production_reports.iter().map(|r| r.line_id.clone()));
        lines.into_iter().collect()
    }

    /// Every product with at least one report, sorted.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.production_reports
            .iter()
            .map(|r| r.product_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Display name of a line, falling back to its ID.
    pub fn line_name(&self, line_id: &LineId) -> String {
        self.line_names
            .get(line_id)
            .cloned()
            .unwrap_or_else(|| line_id.to_string())
    }

    /// Fails with `NotFound` when no report mentions the product.
    pub fn require_product(&self, product_id: &ProductId) -> AppResult<()> {
        if self
            .production_reports
            .iter()
            .any(|r| r.product_id == *product_id)
        {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("product {product_id}")))
        }
    }
}
