//! Market category classification from bet titles

use serde::{Deserialize, Serialize};
use std::fmt;

/// Betting market family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketCategory {
    /// Match result: home / draw / away and double chance
    OneXTwo,
    OverUnder,
    BothTeamsToScore,
    Handicap,
    Corner,
    Cards,
    Other,
}

/// Display order of market rows
pub const MARKET_ORDER: [MarketCategory; 7] = [
    MarketCategory::OneXTwo,
    MarketCategory::OverUnder,
    MarketCategory::BothTeamsToScore,
    MarketCategory::Handicap,
    MarketCategory::Corner,
    MarketCategory::Cards,
    MarketCategory::Other,
];

/// Title keywords per category, in match priority order
///
/// Over/Under is checked before 1X2 so that "Over 1.5 (1X)" style titles land
/// in the totals market.
const KEYWORD_RULES: [(MarketCategory, &[&str]); 6] = [
    (MarketCategory::OverUnder, &["under", "over", "o/u"]),
    (
        MarketCategory::OneXTwo,
        &["1x2", "1)", "2)", "x)", "(1x)", "(x2)", "x2", "1x"],
    ),
    (
        MarketCategory::BothTeamsToScore,
        &["entrambe", "segnano", "gg", "both teams", "btts"],
    ),
    (MarketCategory::Handicap, &["handicap", "spread", "asian"]),
    (
        MarketCategory::Corner,
        &["corner", "angolo", "calcio d'angolo", "corner-kick"],
    ),
    (
        MarketCategory::Cards,
        &["card", "cartell", "ammonizio", "booking", "caution"],
    ),
];

impl MarketCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MarketCategory::OneXTwo => "1X2",
            MarketCategory::OverUnder => "Over/Under",
            MarketCategory::BothTeamsToScore => "Both Teams To Score",
            MarketCategory::Handicap => "Handicap",
            MarketCategory::Corner => "Corner",
            MarketCategory::Cards => "Cards",
            MarketCategory::Other => "Other",
        }
    }

    /// Position in the display order; unknown categories sort last
    pub fn priority(&self) -> usize {
        MARKET_ORDER
            .iter()
            .position(|m| m == self)
            .unwrap_or(MARKET_ORDER.len())
    }
}

impl fmt::Display for MarketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Classify a bet title; the first matching rule wins
pub fn classify_market(title: Option<&str>) -> MarketCategory {
    let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) else {
        return MarketCategory::Other;
    };
    let lower = title.to_lowercase();

    KEYWORD_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(MarketCategory::Other)
}
