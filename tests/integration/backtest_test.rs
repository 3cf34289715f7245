//! Backtest statistics over ingested histories

use bet_analytix::backtest::{summarize_backtest, RiskBand, SampleSizeVerdict};
use bet_analytix::data::{BetCsvReader, BetRecord, Outcome};
use chrono::{Duration, NaiveDate};
use rust_decimal_macros::dec;

use crate::{write_export, TEN_BET_EXPORT};

fn ten_bets() -> Vec<BetRecord> {
    let file = write_export(TEN_BET_EXPORT);
    BetCsvReader::default()
        .read_path(file.path())
        .unwrap()
        .records
}

#[test]
fn test_summary_from_export() {
    let summary = summarize_backtest(&ten_bets());

    assert_eq!(summary.total_bets, 10);
    assert_eq!(summary.wins, 6);
    assert_eq!(summary.losses, 4);
    assert_eq!(summary.win_rate, dec!(60));
    assert_eq!(summary.total_staked, dec!(100));
    assert_eq!(summary.total_profit, dec!(20));
    assert_eq!(summary.roi, dec!(20));
    assert_eq!(summary.avg_odds, dec!(2));
    // Cumulative peaks at +60 after day 6, ends at +20
    assert_eq!(summary.max_drawdown, dec!(-40));
    assert_eq!(summary.risk.band, Some(RiskBand::Risky));
    assert_eq!(summary.sample_size, SampleSizeVerdict::Limited);

    let ci = summary.confidence_interval;
    assert!(ci.lower < summary.win_rate && summary.win_rate < ci.upper);
}

#[test]
fn test_counts_and_bounds_hold() {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let outcomes = [Outcome::Won, Outcome::Lost, Outcome::Void];

    for n in [0usize, 1, 2, 7, 60, 120] {
        let records: Vec<BetRecord> = (0..n)
            .map(|i| {
                BetRecord::new(
                    start + Duration::hours(i as i64 * 5),
                    dec!(5),
                    dec!(1.95),
                    outcomes[i % 3],
                )
            })
            .collect();
        let summary = summarize_backtest(&records);

        assert_eq!(summary.wins + summary.losses + summary.voids, summary.total_bets);
        assert!(summary.win_rate >= dec!(0) && summary.win_rate <= dec!(100));
        assert!(summary.confidence_interval.lower >= dec!(0));
        assert!(summary.confidence_interval.upper <= dec!(100));
        assert!(summary.max_drawdown <= dec!(0));
        if n == 0 {
            assert_eq!(summary.confidence_interval.lower, dec!(0));
            assert_eq!(summary.confidence_interval.upper, dec!(0));
        }
    }
}

#[test]
fn test_sample_size_thresholds() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let make = |n: usize| -> Vec<BetRecord> {
        (0..n)
            .map(|i| {
                BetRecord::new(start + Duration::days(i as i64), dec!(10), dec!(2), Outcome::Won)
            })
            .collect()
    };

    assert_eq!(
        summarize_backtest(&make(50)).sample_size,
        SampleSizeVerdict::Partial { total: 50 }
    );
    assert_eq!(summarize_backtest(&make(100)).sample_size, SampleSizeVerdict::Solid);
}

#[test]
fn test_summary_serializes() {
    let summary = summarize_backtest(&ten_bets()).rounded();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_bets"], 10);
    assert_eq!(json["sample_size"]["verdict"], "limited");
    assert_eq!(json["risk"]["band"], "risky");
}

#[test]
fn test_idempotent_over_same_input() {
    let records = ten_bets();
    assert_eq!(summarize_backtest(&records), summarize_backtest(&records));
}
