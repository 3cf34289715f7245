//! Staking types and errors

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Malformed Kelly inputs, checked in this order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Decimal odds must pay back more than the stake
    #[error("odds must be greater than 1 (got {0})")]
    OddsTooLow(Decimal),
    /// Probability must be strictly between 0 and 1
    #[error("probability must be between 0 and 1, exclusive (got {0})")]
    ProbabilityOutOfRange(Decimal),
    /// Bankroll must be positive
    #[error("bankroll must be greater than 0 (got {0})")]
    NonPositiveBankroll(Decimal),
    /// Inputs so extreme that a derived figure overflows `Decimal`
    #[error("{0} is too large to represent for these inputs")]
    OutOfRange(&'static str),
}

/// Kelly sizing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KellyError {
    /// Inputs out of range
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Inputs are valid but the bet carries no positive expected value
    #[error("Kelly fraction is {kelly_fraction:.4}: no positive expected value for this bet")]
    NoEdge { kelly_fraction: Decimal },
}

impl KellyError {
    /// True for malformed input, false for a business-rule rejection
    pub fn is_validation(&self) -> bool {
        matches!(self, KellyError::Invalid(_))
    }
}

/// Qualitative judgment of the advantage over the bookmaker's implied probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvantageJudgment {
    /// Advantage above 10%
    Excellent,
    /// Advantage above 5%
    Good,
    /// Any positive advantage
    Minimal,
    /// Zero or negative advantage
    None,
}

impl AdvantageJudgment {
    /// Classify an advantage percentage (exclusive lower bounds)
    pub fn from_advantage_pct(advantage_pct: Decimal) -> Self {
        if advantage_pct > Decimal::TEN {
            AdvantageJudgment::Excellent
        } else if advantage_pct > Decimal::from(5) {
            AdvantageJudgment::Good
        } else if advantage_pct > Decimal::ZERO {
            AdvantageJudgment::Minimal
        } else {
            AdvantageJudgment::None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdvantageJudgment::Excellent => "excellent advantage",
            AdvantageJudgment::Good => "good advantage",
            AdvantageJudgment::Minimal => "minimal advantage",
            AdvantageJudgment::None => "no significant advantage",
        }
    }
}

/// Stake recommendation at one fraction of full Kelly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionalStake {
    /// Fraction label, e.g. "1/8"
    pub label: String,
    /// Stake rounded to 0.05
    pub stake: Decimal,
    /// Stake as percentage of bankroll
    pub stake_pct: Decimal,
    /// Total return if the bet wins (stake included)
    pub payout: Decimal,
}

/// Complete Kelly sizing result for one (odds, probability, bankroll) triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KellyRecommendation {
    pub odds: Decimal,
    pub probability: Decimal,
    pub bankroll: Decimal,
    /// Full Kelly fraction of bankroll
    pub kelly_fraction: Decimal,
    /// Probability implied by the odds (1/odds)
    pub implied_probability: Decimal,
    pub is_value_bet: bool,
    /// Expected value per unit staked
    pub ev_per_unit: Decimal,
    /// Relative advantage over the implied probability, in percent
    pub advantage_pct: Decimal,
    pub advantage: AdvantageJudgment,
    /// Fractional Kelly stakes in fixed order: 1/8, 1/10, 1/15, 1/20
    pub stakes: Vec<FractionalStake>,
    /// Expected profit per unit staked, in percent
    pub expected_profit_pct: Decimal,
}

impl KellyRecommendation {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let mut stakes = String::new();
        for s in &self.stakes {
            stakes.push_str(&format!(
                "{:<6} {:>12.2} {:>9.2}% {:>12.2}\n",
                s.label,
                s.stake,
                s.stake_pct.round_dp(2),
                s.payout.round_dp(2),
            ));
        }

        format!(
            r#"
══════════════════════════════════════════════════════
               KELLY STAKING
══════════════════════════════════════════════════════

INPUT
───────────────────────────────────────────────────────
Odds:             {}
Probability:      {:.2}%
Bankroll:         {:.2}

ANALYSIS
───────────────────────────────────────────────────────
Full Kelly:       {:.2}%
Implied Prob:     {:.2}%
Value Bet:        {}
Advantage:        {:+.2}% ({})
Expected Profit:  {:+.2}% per unit staked

STAKES
───────────────────────────────────────────────────────
Level         Stake  Bankroll%       Payout
{}══════════════════════════════════════════════════════
"#,
            self.odds,
            (self.probability * dec!(100)).round_dp(2),
            self.bankroll.round_dp(2),
            (self.kelly_fraction * dec!(100)).round_dp(2),
            (self.implied_probability * dec!(100)).round_dp(2),
            if self.is_value_bet { "yes" } else { "no" },
            self.advantage_pct.round_dp(2),
            self.advantage.label(),
            self.expected_profit_pct.round_dp(2),
            stakes,
        )
    }
}
