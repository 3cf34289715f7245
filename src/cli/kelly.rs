//! Kelly command implementation

use clap::Args;
use rust_decimal::Decimal;

use super::backtest::ReportFormat;
use crate::staking::compute_kelly;

#[derive(Args, Debug)]
pub struct KellyArgs {
    /// Decimal odds offered (must be above 1)
    #[arg(long)]
    pub odds: Decimal,

    /// Estimated win probability, between 0 and 1
    #[arg(long)]
    pub probability: Decimal,

    /// Available bankroll
    #[arg(long)]
    pub bankroll: Decimal,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,
}

impl KellyArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let recommendation = compute_kelly(self.odds, self.probability, self.bankroll)?;

        match self.format {
            ReportFormat::Table => println!("{}", recommendation.format_table()),
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&recommendation)?),
        }
        Ok(())
    }
}

