//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Costing defaults.
    #[serde(default)]
    pub costing: CostingConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Input locations.
    #[serde(default)]
    pub input: InputConfig,
}

/// Costing defaults applied when a snapshot leaves them out.
#[derive(Debug, Clone, Deserialize)]
pub struct CostingConfig {
    /// Hourly rate used when the snapshot carries no labor settings.
    #[serde(default)]
    pub default_hourly_rate: Decimal,
    /// Currency symbol appended to rendered figures.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Relative change (percent) under which a trend counts as stable.
    #[serde(default = "default_trend_threshold")]
    pub trend_threshold_percent: Decimal,
}

fn default_currency_symbol() -> String {
    "EGP".to_string()
}

fn default_trend_threshold() -> Decimal {
    Decimal::from(5)
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            default_hourly_rate: Decimal::ZERO,
            currency_symbol: default_currency_symbol(),
            trend_threshold_percent: default_trend_threshold(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "costline=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// Input locations.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Snapshot file read when no path is given on the command line.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

fn default_snapshot_path() -> String {
    "snapshot.json".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COSTLINE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
