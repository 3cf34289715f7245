//! Decimal odds brackets

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Odds bracket, lower bound inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OddsRange {
    #[serde(rename = "< 1.5")]
    Below1_5,
    #[serde(rename = "1.5-1.8")]
    From1_5To1_8,
    #[serde(rename = "1.8-2.5")]
    From1_8To2_5,
    #[serde(rename = "2.5-3.5")]
    From2_5To3_5,
    #[serde(rename = "3.5-5.0")]
    From3_5To5_0,
    #[serde(rename = "5.0+")]
    Above5_0,
    /// Odds missing; never aggregated
    #[serde(rename = "N/A")]
    NotAvailable,
}

/// Display order of odds columns
pub const ODDS_ORDER: [OddsRange; 6] = [
    OddsRange::Below1_5,
    OddsRange::From1_5To1_8,
    OddsRange::From1_8To2_5,
    OddsRange::From2_5To3_5,
    OddsRange::From3_5To5_0,
    OddsRange::Above5_0,
];

/// Exclusive upper bounds, paired with `ODDS_ORDER`
const UPPER_BOUNDS: [Decimal; 5] = [dec!(1.5), dec!(1.8), dec!(2.5), dec!(3.5), dec!(5.0)];

impl OddsRange {
    pub fn label(&self) -> &'static str {
        match self {
            OddsRange::Below1_5 => "< 1.5",
            OddsRange::From1_5To1_8 => "1.5-1.8",
            OddsRange::From1_8To2_5 => "1.8-2.5",
            OddsRange::From2_5To3_5 => "2.5-3.5",
            OddsRange::From3_5To5_0 => "3.5-5.0",
            OddsRange::Above5_0 => "5.0+",
            OddsRange::NotAvailable => "N/A",
        }
    }

    /// Position in the display order; `NotAvailable` sorts last
    pub fn priority(&self) -> usize {
        ODDS_ORDER
            .iter()
            .position(|r| r == self)
            .unwrap_or(ODDS_ORDER.len())
    }
}

impl fmt::Display for OddsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

pub fn classify_odds_range(odds: Option<Decimal>) -> OddsRange {
    let Some(odds) = odds else {
        return OddsRange::NotAvailable;
    };

    UPPER_BOUNDS
        .iter()
        .zip(ODDS_ORDER)
        .find(|(bound, _)| odds < **bound)
        .map(|(_, range)| range)
        .unwrap_or(OddsRange::Above5_0)
}
