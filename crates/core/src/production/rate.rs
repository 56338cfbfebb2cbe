//! Per-employee hourly-rate overrides.
//!
//! Supervisors may be paid at their own rate. The engine receives that
//! directory as an injected lookup rather than reaching for a global table.

use std::collections::HashMap;

use costline_shared::types::EmployeeId;
use rust_decimal::Decimal;

use super::types::non_negative;

/// Source of per-employee hourly rates.
pub trait HourlyRateSource {
    /// Override rate for an employee, if one is configured.
    fn hourly_rate(&self, employee: &EmployeeId) -> Option<Decimal>;

    /// Override rate when positive, otherwise the base rate.
    fn effective_rate(&self, employee: &EmployeeId, base_rate: Decimal) -> Decimal {
        match self.hourly_rate(employee) {
            Some(rate) if rate > Decimal::ZERO => rate,
            _ => non_negative(base_rate),
        }
    }
}

/// No employee has an override; everyone uses the base rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl HourlyRateSource for NoOverrides {
    fn hourly_rate(&self, _employee: &EmployeeId) -> Option<Decimal> {
        None
    }
}

/// Override rates keyed by employee.
#[derive(Debug, Clone, Default)]
pub struct RateOverrides(HashMap<EmployeeId, Decimal>);

impl RateOverrides {
    /// Creates an empty override table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an employee's rate.
    #[must_use]
    pub fn with_rate(mut self, employee: EmployeeId, rate: Decimal) -> Self {
        self.0.insert(employee, rate);
        self
    }

    /// Number of employees with an override.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no overrides are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(EmployeeId, Decimal)> for RateOverrides {
    fn from_iter<T: IntoIterator<Item = (EmployeeId, Decimal)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl HourlyRateSource for RateOverrides {
    fn hourly_rate(&self, employee: &EmployeeId) -> Option<Decimal> {
        self.0.get(employee).copied()
    }
}

impl<F> HourlyRateSource for F
where
    F: Fn(&EmployeeId) -> Option<Decimal>,
{
    fn hourly_rate(&self, employee: &EmployeeId) -> Option<Decimal> {
        self(employee)
    }
}
