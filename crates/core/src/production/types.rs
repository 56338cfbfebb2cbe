//! Production report records.

use chrono::NaiveDate;
use costline_shared::types::{EmployeeId, LineId, ProductId, ReportId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar;

/// One shift's output for a product on a line, filed by a supervisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReport {
    /// Report ID.
    pub id: ReportId,
    /// Production date.
    pub date: NaiveDate,
    /// Line the product ran on.
    pub line_id: LineId,
    /// Product made.
    pub product_id: ProductId,
    /// Employee or supervisor who filed the report.
    pub employee_id: EmployeeId,
    /// Workers on the shift.
    #[serde(default)]
    pub workers_count: Decimal,
    /// Hours worked per worker.
    #[serde(default)]
    pub work_hours: Decimal,
    /// Good units produced.
    #[serde(default)]
    pub quantity_produced: Decimal,
    /// Units scrapped.
    #[serde(default)]
    pub quantity_waste: Decimal,
    /// Supervisor indirect cost computed when the report was saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_indirect_cost: Option<Decimal>,
}

impl ProductionReport {
    /// Month key the report belongs to.
    #[must_use]
    pub fn month_key(&self) -> String {
        calendar::month_key(self.date)
    }

    /// Workers count, clamped at zero.
    #[must_use]
    pub fn workers(&self) -> Decimal {
        non_negative(self.workers_count)
    }

    /// Work hours, clamped at zero.
    #[must_use]
    pub fn hours(&self) -> Decimal {
        non_negative(self.work_hours)
    }

    /// Worker-hours for the shift.
    #[must_use]
    pub fn worker_hours(&self) -> Decimal {
        self.workers() * self.hours()
    }

    /// Quantity produced, clamped at zero.
    #[must_use]
    pub fn produced(&self) -> Decimal {
        non_negative(self.quantity_produced)
    }

    /// Stored supervisor cost, honored only when positive.
    #[must_use]
    pub fn cached_supervisor_cost(&self) -> Option<Decimal> {
        self.supervisor_indirect_cost
            .filter(|cost| *cost > Decimal::ZERO)
    }
}

/// Factory-wide labor settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborSettings {
    /// Base hourly rate per worker.
    #[serde(default)]
    pub hourly_rate: Decimal,
}

impl LaborSettings {
    /// Hourly rate from optional settings; absent settings mean a zero rate.
    #[must_use]
    pub fn rate_of(settings: Option<&Self>) -> Decimal {
        settings.map_or(Decimal::ZERO, |s| non_negative(s.hourly_rate))
    }
}

/// Clamps negative inputs to zero.
#[must_use]
pub(crate) fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn report() -> ProductionReport {
        ProductionReport {
            id: ReportId::new("r1"),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            line_id: LineId::new("L1"),
            product_id: ProductId::new("A"),
            employee_id: EmployeeId::new("sup-1"),
            workers_count: dec!(5),
            work_hours: dec!(8),
            quantity_produced: dec!(80),
            quantity_waste: dec!(2),
            supervisor_indirect_cost: None,
        }
    }

    #[test]
    fn test_worker_hours() {
        assert_eq!(report().worker_hours(), dec!(40));
    }

    #[test]
    fn test_negative_fields_clamped() {
        let mut r = report();
        r.workers_count = dec!(-3);
        r.quantity_produced = dec!(-1);
        assert_eq!(r.worker_hours(), Decimal::ZERO);
        assert_eq!(r.produced(), Decimal::ZERO);
    }

    #[test]
    fn test_cached_supervisor_cost_requires_positive() {
        let mut r = report();
        assert_eq!(r.cached_supervisor_cost(), None);
        r.supervisor_indirect_cost = Some(Decimal::ZERO);
        assert_eq!(r.cached_supervisor_cost(), None);
        r.supervisor_indirect_cost = Some(dec!(250));
        assert_eq!(r.cached_supervisor_cost(), Some(dec!(250)));
    }

    #[test]
    fn test_month_key() {
        assert_eq!(report().month_key(), "2024-06");
    }

    #[test]
    fn test_rate_of_absent_settings_is_zero() {
        assert_eq!(LaborSettings::rate_of(None), Decimal::ZERO);
        let settings = LaborSettings { hourly_rate: dec!(12.5) };
        assert_eq!(LaborSettings::rate_of(Some(&settings)), dec!(12.5));
    }

    #[test]
    fn test_deserialize_document() {
        let json = r#"{
            "id": "r1",
            "date": "2024-06-03",
            "lineId": "L1",
            "productId": "A",
            "employeeId": "sup-1",
            "workersCount": 5,
            "workHours": "7.5",
            "quantityProduced": 80
        }"#;
        let parsed: ProductionReport = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.work_hours, dec!(7.5));
        assert_eq!(parsed.quantity_waste, Decimal::ZERO);
        assert!(parsed.supervisor_indirect_cost.is_none());
    }
}
