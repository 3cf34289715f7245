//! Configuration types for bet-analytix

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::Period;
use crate::telemetry::LogFormat;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub backtest: BacktestConfig,
    #[serde(default)]
    pub heatmap: HeatmapConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Bet-history export layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Field separator, must be a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default = "default_date_column")]
    pub date_column: String,

    #[serde(default = "default_stake_column")]
    pub stake_column: String,

    #[serde(default = "default_odds_column")]
    pub odds_column: String,

    /// Optional; profit is derived from stake and odds when absent
    #[serde(default = "default_profit_column")]
    pub profit_column: String,

    #[serde(default = "default_outcome_column")]
    pub outcome_column: String,

    /// Optional; used for market classification
    #[serde(default = "default_title_column")]
    pub title_column: String,
}

fn default_delimiter() -> char {
    ';'
}
fn default_date_column() -> String {
    "Data".to_string()
}
fn default_stake_column() -> String {
    "Puntata".to_string()
}
fn default_odds_column() -> String {
    "Quote".to_string()
}
fn default_profit_column() -> String {
    "Profitto".to_string()
}
fn default_outcome_column() -> String {
    "Stato".to_string()
}
fn default_title_column() -> String {
    "Titolo_della_scommessa".to_string()
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            date_column: default_date_column(),
            stake_column: default_stake_column(),
            odds_column: default_odds_column(),
            profit_column: default_profit_column(),
            outcome_column: default_outcome_column(),
            title_column: default_title_column(),
        }
    }
}

/// Backtest statistics configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// Count calendar days without bets as zero-profit days in the Sharpe ratio
    #[serde(default)]
    pub fill_idle_days: bool,

    /// Default window when `--period` is not given
    #[serde(default)]
    pub period: Period,
}

/// Heatmap configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    /// Default window when `--period` is not given
    #[serde(default)]
    pub period: Period,
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
