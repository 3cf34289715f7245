//! File ingestion and period selection

use bet_analytix::config::IngestConfig;
use bet_analytix::data::{BetCsvReader, DataError, DropReason, Outcome, Period};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::{write_export, TEN_BET_EXPORT};

#[test]
fn test_read_path() {
    let file = write_export(TEN_BET_EXPORT);
    let ingested = BetCsvReader::default().read_path(file.path()).unwrap();

    assert_eq!(ingested.report.rows_read, 10);
    assert_eq!(ingested.report.accepted, 10);
    assert_eq!(ingested.report.total_dropped(), 0);

    let last = ingested.records.last().unwrap();
    assert_eq!(last.outcome, Outcome::Lost);
    assert_eq!(last.profit, Some(dec!(-10)));
    assert_eq!(last.market_title.as_deref(), Some("Inter - Milan 1X2"));
}

#[test]
fn test_dirty_rows_are_counted() {
    let export = "\
Data;Puntata;Quote;Profitto;Stato;Titolo della scommessa
01/01/2024 20:00;10;2,00;10;Vinto;Over 2.5
01/01/2024 21:00;0;2,00;0;Vinto;Over 2.5
01/01/2024 22:00;10;1,00;0;Vinto;Over 2.5
01/01/2024 23:00;10;2,00;0;Cashout;Over 2.5
";
    let file = write_export(export);
    let ingested = BetCsvReader::default().read_path(file.path()).unwrap();

    assert_eq!(ingested.records.len(), 1);
    assert_eq!(ingested.report.total_dropped(), 3);
    assert_eq!(ingested.report.dropped[&DropReason::InvalidStake], 1);
    assert_eq!(ingested.report.dropped[&DropReason::InvalidOdds], 1);
    assert_eq!(ingested.report.dropped[&DropReason::InvalidOutcome], 1);
}

#[test]
fn test_missing_file() {
    let err = BetCsvReader::default()
        .read_path("/nonexistent/bets.csv")
        .unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}

#[test]
fn test_english_export_with_custom_columns() {
    let config = IngestConfig {
        delimiter: ',',
        date_column: "Date".to_string(),
        stake_column: "Stake".to_string(),
        odds_column: "Odds".to_string(),
        profit_column: "Profit".to_string(),
        outcome_column: "Result".to_string(),
        title_column: "Bet title".to_string(),
    };
    let export = "\
Date,Stake,Odds,Result,Bet title
2024-02-01 12:00:00,20,1.75,Won,Asian Handicap -0.5
2024-02-02,20,3.10,Lost,Correct score 2-1
";
    let file = write_export(export);
    let ingested = BetCsvReader::new(config).read_path(file.path()).unwrap();

    assert_eq!(ingested.records.len(), 2);
    assert_eq!(ingested.records[0].resolved_profit(), dec!(15));
    assert_eq!(ingested.records[1].resolved_profit(), dec!(-20));
    assert_eq!(
        ingested.records[0].market_title.as_deref(),
        Some("Asian Handicap -0.5")
    );
}

#[test]
fn test_period_selection() {
    let file = write_export(TEN_BET_EXPORT);
    let records = BetCsvReader::default()
        .read_path(file.path())
        .unwrap()
        .records;
    let now = NaiveDate::from_ymd_opt(2024, 1, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    assert_eq!(Period::All.select(&records, now).len(), 10);
    // Cutoff 07/01 12:00: bets from 07/01 20:00 onwards remain
    let recent = "3days".parse::<Period>().unwrap().select(&records, now);
    assert_eq!(recent.len(), 4);
    assert!(recent.iter().all(|r| r.outcome == Outcome::Lost));
}
