//! Delimited bet-history ingestion
//!
//! Bookmaker exports are semicolon separated, use comma decimals and
//! day-first dates. Rows that cannot be parsed are dropped and counted rather
//! than failing the whole file.

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use super::{BetRecord, DataError, DropReason, IngestReport, Ingested, Outcome};
use crate::config::IngestConfig;

const DATETIME_FORMATS: [&str; 4] = [
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

/// Parse a number that may use either comma or dot as decimal separator
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

/// Parse a day-first timestamp, with or without a time part
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Header names are matched after trimming and replacing spaces with underscores
fn normalize_header(name: &str) -> String {
    name.trim().replace(' ', "_")
}

/// Resolved positions of the export columns
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    date: usize,
    stake: usize,
    odds: usize,
    outcome: usize,
    profit: Option<usize>,
    title: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord, config: &IngestConfig) -> Result<Self, DataError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |wanted: &str| {
            let wanted = normalize_header(wanted);
            names.iter().position(|n| *n == wanted)
        };
        let require = |wanted: &str| {
            find(wanted).ok_or_else(|| DataError::MissingColumn(normalize_header(wanted)))
        };

        Ok(Self {
            date: require(&config.date_column)?,
            stake: require(&config.stake_column)?,
            odds: require(&config.odds_column)?,
            outcome: require(&config.outcome_column)?,
            profit: find(&config.profit_column),
            title: find(&config.title_column),
        })
    }
}

/// Reads bet-history exports into records
#[derive(Debug, Clone)]
pub struct BetCsvReader {
    config: IngestConfig,
}

impl BetCsvReader {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Read an export file
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Ingested, DataError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Reading bet history");
        let file = File::open(path)?;
        self.read_from(file)
    }

    /// Read an export from any byte source
    pub fn read_from<R: Read>(&self, source: R) -> Result<Ingested, DataError> {
        if !self.config.delimiter.is_ascii() {
            return Err(DataError::InvalidDelimiter(self.config.delimiter));
        }
        let delimiter = self.config.delimiter as u8;

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source);

        let columns = ColumnMap::resolve(reader.headers()?, &self.config)?;
        tracing::debug!(?columns, "Resolved export columns");

        let mut records = Vec::new();
        let mut report = IngestReport::default();

        for row in reader.records() {
            let row = row?;
            report.rows_read += 1;

            match Self::parse_row(&row, &columns) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    tracing::debug!(
                        line = row.position().map(|p| p.line()),
                        reason = reason.as_str(),
                        "Dropping row"
                    );
                    crate::telemetry::record_row_dropped(reason);
                    *report.dropped.entry(reason).or_insert(0) += 1;
                }
            }
        }

        report.accepted = records.len();
        crate::telemetry::record_rows_ingested(report.accepted);
        tracing::info!(
            rows = report.rows_read,
            accepted = report.accepted,
            dropped = report.total_dropped(),
            "Bet history loaded"
        );

        Ok(Ingested { records, report })
    }

    fn parse_row(row: &StringRecord, columns: &ColumnMap) -> Result<BetRecord, DropReason> {
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let placed_at = parse_datetime(field(columns.date)).ok_or(DropReason::InvalidDate)?;
        let stake = parse_decimal(field(columns.stake))
            .filter(|s| *s > Decimal::ZERO)
            .ok_or(DropReason::InvalidStake)?;
        let odds = parse_decimal(field(columns.odds))
            .filter(|o| *o > Decimal::ONE)
            .ok_or(DropReason::InvalidOdds)?;
        let outcome =
            Outcome::from_label(field(columns.outcome)).ok_or(DropReason::InvalidOutcome)?;

        let mut record = BetRecord::new(placed_at, stake, odds, outcome);
        if let Some(profit) = columns.profit.and_then(|idx| parse_decimal(field(idx))) {
            record = record.with_profit(profit);
        }
        if let Some(title) = columns.title.map(field).filter(|t| !t.is_empty()) {
            record = record.with_title(title);
        }
        Ok(record)
    }
}

impl Default for BetCsvReader {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}
