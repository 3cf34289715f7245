//! Backtest command implementation

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::backtest::{summarize, SummaryOptions};
use crate::config::Config;
use crate::data::Period;

/// Output format for report commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct BacktestArgs {
    /// Bet history export (delimited text with a header row)
    pub input: PathBuf,

    /// Window to analyse: "all" or a number of days such as "30days"
    #[arg(long)]
    pub period: Option<Period>,

    /// Count idle days as zero-profit days in the Sharpe ratio
    #[arg(long)]
    pub fill_idle_days: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,
}

impl BacktestArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let period = self.period.unwrap_or(config.backtest.period);
        let now = chrono::Local::now().naive_local();
        let records = super::load_window(&self.input, period, &config.ingest, now)?;

        let mut options = SummaryOptions::from_config(&config.backtest);
        options.fill_idle_days |= self.fill_idle_days;

        tracing::info!(bets = records.len(), %period, "Running backtest");
        let summary = summarize(&records, &options).rounded();

        match self.format {
            ReportFormat::Table => println!("{}", summary.format_table()),
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        }
        Ok(())
    }
}
