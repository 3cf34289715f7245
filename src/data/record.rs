//! Bet history record types

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement state of a bet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
    /// Cancelled market, stake returned
    Void,
}

impl Outcome {
    /// Parse a bookmaker export label
    ///
    /// Accepts the Italian export labels (Vinto, Perso, Nullo) and their
    /// English equivalents, case-insensitively. Refunds and cash-outs are not
    /// outcomes and yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "vinto" | "won" | "win" => Some(Outcome::Won),
            "perso" | "lost" | "lose" | "loss" => Some(Outcome::Lost),
            "nullo" | "void" => Some(Outcome::Void),
            _ => None,
        }
    }

    /// Won or lost (void bets are not settled on price)
    pub fn is_settled(&self) -> bool {
        matches!(self, Outcome::Won | Outcome::Lost)
    }
}

/// One historical wager after ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    /// When the bet was placed
    pub placed_at: NaiveDateTime,
    /// Amount wagered, always positive
    pub stake: Decimal,
    /// Decimal odds, always greater than 1
    pub odds: Decimal,
    pub outcome: Outcome,
    /// Net gain or loss as stated by the bookmaker, if exported
    pub profit: Option<Decimal>,
    /// Free-text bet description used for market classification
    pub market_title: Option<String>,
}

impl BetRecord {
    pub fn new(placed_at: NaiveDateTime, stake: Decimal, odds: Decimal, outcome: Outcome) -> Self {
        Self {
            placed_at,
            stake,
            odds,
            outcome,
            profit: None,
            market_title: None,
        }
    }

    pub fn with_profit(mut self, profit: Decimal) -> Self {
        self.profit = Some(profit);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.market_title = Some(title.into());
        self
    }

    /// Stated profit, or the profit implied by the outcome
    pub fn resolved_profit(&self) -> Decimal {
        self.profit.unwrap_or_else(|| match self.outcome {
            Outcome::Won => self.stake * (self.odds - Decimal::ONE),
            Outcome::Lost => -self.stake,
            Outcome::Void => Decimal::ZERO,
        })
    }

    pub fn is_settled(&self) -> bool {
        self.outcome.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::from_label("Vinto"), Some(Outcome::Won));
        assert_eq!(Outcome::from_label(" perso "), Some(Outcome::Lost));
        assert_eq!(Outcome::from_label("NULLO"), Some(Outcome::Void));
        assert_eq!(Outcome::from_label("won"), Some(Outcome::Won));
        assert_eq!(Outcome::from_label("Rimborso"), None);
        assert_eq!(Outcome::from_label(""), None);
    }

    #[test]
    fn test_derived_profit() {
        let won = BetRecord::new(at(), dec!(10), dec!(2.5), Outcome::Won);
        assert_eq!(won.resolved_profit(), dec!(15));

        let lost = BetRecord::new(at(), dec!(10), dec!(2.5), Outcome::Lost);
        assert_eq!(lost.resolved_profit(), dec!(-10));

        let void = BetRecord::new(at(), dec!(10), dec!(2.5), Outcome::Void);
        assert_eq!(void.resolved_profit(), dec!(0));
    }

    #[test]
    fn test_stated_profit_wins_over_derived() {
        // Cash-out style partial profit
        let rec = BetRecord::new(at(), dec!(10), dec!(2.5), Outcome::Won).with_profit(dec!(7.20));
        assert_eq!(rec.resolved_profit(), dec!(7.20));
    }

    #[test]
    fn test_settled() {
        assert!(Outcome::Won.is_settled());
        assert!(Outcome::Lost.is_settled());
        assert!(!Outcome::Void.is_settled());
    }
}
