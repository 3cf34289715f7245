//! Ingestion errors and reporting

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::{BetRecord, Period};

/// Ingestion and selection errors
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying read failure
    #[error("failed to read bet history: {0}")]
    Io(#[from] std::io::Error),
    /// CSV framing or encoding failure
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    /// Header lacks a required column
    #[error("required column '{0}' not found in header")]
    MissingColumn(String),
    /// Delimiter is not a single-byte character
    #[error("delimiter '{0}' is not an ASCII character")]
    InvalidDelimiter(char),
    /// Period string could not be parsed
    #[error("invalid period '{0}': expected 'all' or a number of days such as '30days'")]
    InvalidPeriod(String),
    /// Nothing left to analyse after filtering
    #[error("no bets found for the selected period ({period})")]
    NoData { period: Period },
}

/// Why a row was excluded from analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    InvalidDate,
    InvalidStake,
    InvalidOdds,
    InvalidOutcome,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::InvalidDate => "invalid_date",
            DropReason::InvalidStake => "invalid_stake",
            DropReason::InvalidOdds => "invalid_odds",
            DropReason::InvalidOutcome => "invalid_outcome",
        }
    }
}

/// Row accounting for one ingestion run
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Rows turned into records
    pub accepted: usize,
    /// Excluded rows by reason
    pub dropped: BTreeMap<DropReason, usize>,
}

impl IngestReport {
    pub fn total_dropped(&self) -> usize {
        self.dropped.values().sum()
    }
}

/// Records plus the accounting of how they were obtained
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub records: Vec<BetRecord>,
    pub report: IngestReport,
}
