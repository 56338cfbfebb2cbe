//! Inputs shared by every costing operation.

use rust_decimal::Decimal;

use crate::cost_center::CostCenterBook;
use crate::production::{HourlyRateSource, LaborSettings, NoOverrides};

/// Cost configuration, base hourly rate and rate overrides for one request.
///
/// Cheap to copy; holds only borrows.
#[derive(Clone, Copy)]
pub struct CostContext<'a> {
    book: &'a CostCenterBook<'a>,
    hourly_rate: Decimal,
    overrides: &'a dyn HourlyRateSource,
}

impl<'a> CostContext<'a> {
    /// Context using the rate from labor settings (absent settings mean rate 0).
    #[must_use]
    pub fn new(book: &'a CostCenterBook<'a>, labor: Option<&LaborSettings>) -> Self {
        Self::with_hourly_rate(book, LaborSettings::rate_of(labor))
    }

    /// Context with an explicit base hourly rate.
    #[must_use]
    pub fn with_hourly_rate(book: &'a CostCenterBook<'a>, hourly_rate: Decimal) -> Self {
        Self {
            book,
            hourly_rate: hourly_rate.max(Decimal::ZERO),
            overrides: &NoOverrides,
        }
    }

    /// Attaches per-employee rate overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &'a dyn HourlyRateSource) -> Self {
        self.overrides = overrides;
        self
    }

    /// Cost-center configuration.
    #[must_use]
    pub fn book(&self) -> &'a CostCenterBook<'a> {
        self.book
    }

    /// Base hourly rate.
    #[must_use]
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Rate overrides.
    #[must_use]
    pub fn overrides(&self) -> &'a dyn HourlyRateSource {
        self.overrides
    }
}

impl std::fmt::Debug for CostContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostContext")
            .field("book", &self.book)
            .field("hourly_rate", &self.hourly_rate)
            .finish_non_exhaustive()
    }
}
