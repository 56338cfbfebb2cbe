//! Cost allocation and aggregation engine for Costline.
//!
//! This crate contains pure computation with ZERO I/O dependencies.
//! It turns production reports plus cost-center configuration into labor
//! cost, indirect cost and cost-per-unit figures. Every function borrows its
//! inputs, never mutates them, and keeps any memoization local to one call.
//!
//! # Modules
//!
//! - `calendar` - Month keys and days-in-month
//! - `cost_center` - Cost-center configuration and the indirect allocation primitive
//! - `production` - Production reports, labor cost and hourly-rate overrides
//! - `costing` - Line/product snapshots, per-report apportionment, history and trends

pub mod calendar;
pub mod cost_center;
pub mod costing;
pub mod production;

pub use cost_center::CostCenterBook;
pub use costing::CostContext;
