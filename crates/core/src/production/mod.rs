//! Production reports, labor cost and hourly-rate overrides.

pub mod labor;
pub mod rate;
pub mod types;

pub use labor::{daily_labor_cost, report_labor_cost};
pub use rate::{HourlyRateSource, NoOverrides, RateOverrides};
pub use types::{LaborSettings, ProductionReport};
