//! Qualitative risk and sample-size verdicts

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bets needed for a solid backtest
pub const SOLID_SAMPLE: usize = 100;
/// Bets needed for a partial backtest
pub const PARTIAL_SAMPLE: usize = 50;

/// Risk/return quality from the Sharpe ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharpeRating {
    Excellent,
    Good,
    Fair,
    Low,
}

impl SharpeRating {
    pub fn from_sharpe(sharpe: Decimal) -> Self {
        if sharpe > dec!(1.5) {
            SharpeRating::Excellent
        } else if sharpe > Decimal::ONE {
            SharpeRating::Good
        } else if sharpe > dec!(0.5) {
            SharpeRating::Fair
        } else {
            SharpeRating::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SharpeRating::Excellent => "Excellent risk/return ratio",
            SharpeRating::Good => "Good risk/return ratio",
            SharpeRating::Fair => "Fair risk/return ratio",
            SharpeRating::Low => "Low risk/return ratio",
        }
    }
}

/// Variability band from the coefficient of variation of profits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    /// cv > 2
    Risky,
    /// cv > 1
    ModeratelyRisky,
    Stable,
}

impl RiskBand {
    pub fn from_cv(cv: Decimal) -> Self {
        if cv > dec!(2) {
            RiskBand::Risky
        } else if cv > Decimal::ONE {
            RiskBand::ModeratelyRisky
        } else {
            RiskBand::Stable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Risky => "Risky: high variability of results",
            RiskBand::ModeratelyRisky => "Moderately risky: significant variability",
            RiskBand::Stable => "Stable: consistent results",
        }
    }
}

/// Combined risk verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// `None` when the mean profit is zero and cv is undefined
    pub band: Option<RiskBand>,
    pub coefficient_of_variation: Option<Decimal>,
    pub sharpe_rating: SharpeRating,
}

impl RiskAssessment {
    /// Assess profit dispersion relative to the mean profit
    ///
    /// A missing standard deviation (fewer than two bets) counts as zero
    /// dispersion.
    pub fn assess(
        profit_std: Option<Decimal>,
        profit_mean: Option<Decimal>,
        sharpe: Decimal,
    ) -> Self {
        let sharpe_rating = SharpeRating::from_sharpe(sharpe);

        let cv = profit_mean
            .filter(|m| !m.is_zero())
            .map(|m| profit_std.unwrap_or(Decimal::ZERO) / m.abs());

        Self {
            band: cv.map(RiskBand::from_cv),
            coefficient_of_variation: cv,
            sharpe_rating,
        }
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.band {
            Some(band) => write!(f, "{}. {}.", band.label(), self.sharpe_rating.label()),
            None => write!(f, "Not determinable: average profit is zero"),
        }
    }
}

/// Whether the bet count supports conclusions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "verdict")]
pub enum SampleSizeVerdict {
    Solid,
    Partial { total: usize },
    Limited,
}

impl SampleSizeVerdict {
    pub fn from_total(total: usize) -> Self {
        if total >= SOLID_SAMPLE {
            SampleSizeVerdict::Solid
        } else if total >= PARTIAL_SAMPLE {
            SampleSizeVerdict::Partial { total }
        } else {
            SampleSizeVerdict::Limited
        }
    }
}

impl fmt::Display for SampleSizeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleSizeVerdict::Solid => {
                write!(f, "Solid: sample large enough for a reliable analysis")
            }
            SampleSizeVerdict::Partial { total } => write!(
                f,
                "Partial: {total} bets, at least {SOLID_SAMPLE} are recommended for a solid backtest"
            ),
            SampleSizeVerdict::Limited => {
                write!(f, "Limited: sample too small for a reliable analysis")
            }
        }
    }
}
