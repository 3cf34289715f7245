//! Backtest analytics and reporting

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::verdict::{RiskAssessment, SampleSizeVerdict};

/// Display precision for monetary and percentage figures
const DISPLAY_DP: u32 = 2;

/// 95% confidence interval on the win rate, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: Decimal,
    pub upper: Decimal,
}

/// Summary statistics from a bet history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacktestSummary {
    /// Bets with a recognised outcome, voids included
    pub total_bets: usize,
    pub wins: usize,
    pub losses: usize,
    pub voids: usize,
    /// Wins over all bets, in percent
    pub win_rate: Decimal,
    /// Mean decimal odds of settled bets
    pub avg_odds: Decimal,
    /// Total stake of settled bets
    pub total_staked: Decimal,
    /// Net profit of settled bets
    pub total_profit: Decimal,
    /// Return on stake, in percent
    pub roi: Decimal,
    /// Worst decline from peak cumulative profit (non-positive)
    pub max_drawdown: Decimal,
    /// Annualized Sharpe ratio of daily profit
    pub sharpe_ratio: Decimal,
    pub confidence_interval: ConfidenceInterval,
    pub risk: RiskAssessment,
    pub sample_size: SampleSizeVerdict,
}

impl BacktestSummary {
    /// Copy with every figure rounded to display precision
    pub fn rounded(&self) -> Self {
        let round = |d: Decimal| d.round_dp(DISPLAY_DP);
        Self {
            win_rate: round(self.win_rate),
            avg_odds: round(self.avg_odds),
            total_staked: round(self.total_staked),
            total_profit: round(self.total_profit),
            roi: round(self.roi),
            max_drawdown: round(self.max_drawdown),
            sharpe_ratio: round(self.sharpe_ratio),
            confidence_interval: ConfidenceInterval {
                lower: round(self.confidence_interval.lower),
                upper: round(self.confidence_interval.upper),
            },
            risk: RiskAssessment {
                coefficient_of_variation: self.risk.coefficient_of_variation.map(round),
                ..self.risk.clone()
            },
            ..self.clone()
        }
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
               BACKTEST RESULTS
══════════════════════════════════════════════════════

ACTIVITY
───────────────────────────────────────────────────────
Total Bets:       {}
Won / Lost / Void: {} / {} / {}
Win Rate:         {:.2}%
95% CI:           {:.2}% - {:.2}%
Avg Odds:         {:.2}

PERFORMANCE
───────────────────────────────────────────────────────
Total Staked:     {:.2}
Total Profit:     {:+.2}
ROI:              {:+.2}%
Max Drawdown:     {:.2}
Sharpe Ratio:     {:.2}

VERDICT
───────────────────────────────────────────────────────
Risk:             {}
Sample Size:      {}
══════════════════════════════════════════════════════
"#,
            self.total_bets,
            self.wins,
            self.losses,
            self.voids,
            self.win_rate,
            self.confidence_interval.lower,
            self.confidence_interval.upper,
            self.avg_odds,
            self.total_staked,
            self.total_profit,
            self.roi,
            self.max_drawdown,
            self.sharpe_ratio,
            self.risk,
            self.sample_size,
        )
    }
}
