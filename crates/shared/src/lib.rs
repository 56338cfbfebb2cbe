//! Shared types, errors, and configuration for Costline.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for lines, products, employees, cost centers and reports
//! - Money rounding and fixed-precision formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

#[cfg(test)]
mod error_tests;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
