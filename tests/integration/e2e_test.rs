//! End-to-end integration tests

use bet_analytix::cli::load_window;
use bet_analytix::config::Config;
use bet_analytix::data::{DataError, Period};
use chrono::NaiveDate;

use crate::{write_export, TEN_BET_EXPORT};

#[test]
fn test_config_example_loads() {
    let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example")).unwrap();
    assert_eq!(config.ingest.delimiter, ';');
    assert_eq!(config.backtest.period, Period::All);
}

#[test]
fn test_load_window_selects_period() {
    let file = write_export(TEN_BET_EXPORT);
    let config = Config::default();
    let now = NaiveDate::from_ymd_opt(2024, 1, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let records = load_window(file.path(), Period::LastDays(3), &config.ingest, now).unwrap();
    assert_eq!(records.len(), 4);
}

#[test]
fn test_empty_window_is_no_data() {
    let file = write_export(TEN_BET_EXPORT);
    let config = Config::default();
    let now = NaiveDate::from_ymd_opt(2030, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let err = load_window(file.path(), Period::LastDays(30), &config.ingest, now).unwrap_err();
    let data_err = err.downcast_ref::<DataError>().unwrap();
    assert!(matches!(
        data_err,
        DataError::NoData {
            period: Period::LastDays(30)
        }
    ));
    assert!(err.to_string().contains("no bets found"));
}

#[test]
fn test_missing_column_surfaces_with_context() {
    let file = write_export("Data;Puntata;Stato\n01/01/2024 20:00;10;Vinto\n");
    let config = Config::default();
    let now = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let err = load_window(file.path(), Period::All, &config.ingest, now).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load bet history"));
    assert!(matches!(
        err.downcast_ref::<DataError>(),
        Some(DataError::MissingColumn(_))
    ));
}
