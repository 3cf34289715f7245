//! CLI interface for bet-analytix
//!
//! Provides subcommands for:
//! - `kelly`: Fractional Kelly stake sizing
//! - `backtest`: Performance statistics over a bet history export
//! - `heatmap`: Market/odds performance grid
//! - `config`: Show effective configuration

mod backtest;
mod heatmap;
mod kelly;

pub use backtest::{BacktestArgs, ReportFormat};
pub use heatmap::{HeatmapArgs, HeatmapFormat};
pub use kelly::KellyArgs;

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::Path;

use crate::config::IngestConfig;
use crate::data::{BetCsvReader, BetRecord, DataError, Period};

#[derive(Parser, Debug)]
#[command(name = "bet-analytix")]
#[command(about = "Kelly staking, backtest statistics and market/odds heatmaps for bet histories")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend fractional Kelly stakes for a single bet
    Kelly(KellyArgs),
    /// Compute performance statistics from a bet history
    Backtest(BacktestArgs),
    /// Break performance down by market and odds range
    Heatmap(HeatmapArgs),
    /// Show effective configuration
    Config,
}

/// Load an export and keep the bets inside `period`
///
/// An empty selection is reported as [`DataError::NoData`].
pub fn load_window(
    path: &Path,
    period: Period,
    ingest: &IngestConfig,
    now: NaiveDateTime,
) -> anyhow::Result<Vec<BetRecord>> {
    let ingested = BetCsvReader::new(ingest.clone())
        .read_path(path)
        .with_context(|| format!("Failed to load bet history from {}", path.display()))?;

    let records = period.select(&ingested.records, now);
    tracing::info!(
        %period,
        loaded = ingested.records.len(),
        selected = records.len(),
        "Selected bets"
    );

    if records.is_empty() {
        return Err(DataError::NoData { period }.into());
    }
    Ok(records)
}
