//! Time window selection

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{BetRecord, DataError};

/// Window of bet history to analyse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Period {
    /// Whole history
    #[default]
    All,
    /// Bets placed strictly after `now - days`
    LastDays(u32),
}

impl Period {
    /// Earliest excluded instant, if any
    ///
    /// A window reaching past the earliest representable date has no cutoff.
    pub fn cutoff(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Period::All => None,
            Period::LastDays(days) => Duration::try_days(i64::from(*days))
                .and_then(|window| now.checked_sub_signed(window)),
        }
    }

    /// Select the records inside the window
    pub fn select(&self, records: &[BetRecord], now: NaiveDateTime) -> Vec<BetRecord> {
        match self.cutoff(now) {
            None => records.to_vec(),
            Some(cutoff) => records
                .iter()
                .filter(|r| r.placed_at > cutoff)
                .cloned()
                .collect(),
        }
    }
}

impl FromStr for Period {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        if trimmed == "all" {
            return Ok(Period::All);
        }
        let digits = trimmed
            .strip_suffix("days")
            .or_else(|| trimmed.strip_suffix('d'))
            .unwrap_or(&trimmed)
            .trim();
        digits
            .parse::<u32>()
            .map(Period::LastDays)
            .map_err(|_| DataError::InvalidPeriod(s.to_string()))
    }
}

impl TryFrom<String> for Period {
    type Error = DataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::All => write!(f, "all"),
            Period::LastDays(days) => write!(f, "{days}days"),
        }
    }
}
