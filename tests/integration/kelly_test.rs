//! Kelly staking through the public API

use bet_analytix::staking::{
    compute_kelly, round_to_nearest_five_cents, AdvantageJudgment, KellyError, ValidationError,
};
use rust_decimal_macros::dec;

#[test]
fn test_value_bet_recommendation() {
    let rec = compute_kelly(dec!(2.0), dec!(0.6), dec!(100)).unwrap();

    assert_eq!(rec.kelly_fraction, dec!(0.2));
    assert_eq!(rec.implied_probability, dec!(0.5));
    assert!(rec.is_value_bet);
    assert_eq!(rec.advantage_pct, dec!(20));
    assert_eq!(rec.advantage, AdvantageJudgment::Excellent);
    assert_eq!(rec.expected_profit_pct, dec!(20));

    let labels: Vec<&str> = rec.stakes.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["1/8", "1/10", "1/15", "1/20"]);

    let stakes: Vec<_> = rec.stakes.iter().map(|s| s.stake).collect();
    assert_eq!(stakes, [dec!(2.50), dec!(2.00), dec!(1.35), dec!(1.00)]);
    assert_eq!(rec.stakes[0].payout, dec!(5.00));
}

#[test]
fn test_no_edge_is_not_a_validation_error() {
    let err = compute_kelly(dec!(1.5), dec!(0.5), dec!(100)).unwrap_err();
    assert!(!err.is_validation());
    assert_eq!(
        err,
        KellyError::NoEdge {
            kelly_fraction: dec!(-0.5)
        }
    );
}

#[test]
fn test_validation_errors() {
    let err = compute_kelly(dec!(1.0), dec!(0.5), dec!(100)).unwrap_err();
    assert_eq!(err, KellyError::Invalid(ValidationError::OddsTooLow(dec!(1.0))));

    let err = compute_kelly(dec!(2.0), dec!(1), dec!(100)).unwrap_err();
    assert!(matches!(
        err,
        KellyError::Invalid(ValidationError::ProbabilityOutOfRange(_))
    ));

    let err = compute_kelly(dec!(2.0), dec!(0.6), dec!(-1)).unwrap_err();
    assert!(matches!(
        err,
        KellyError::Invalid(ValidationError::NonPositiveBankroll(_))
    ));
}

#[test]
fn test_stakes_are_multiples_of_five_cents() {
    let rec = compute_kelly(dec!(3.4), dec!(0.37), dec!(1234.56)).unwrap();
    for stake in &rec.stakes {
        assert!((stake.stake * dec!(100) % dec!(5)).is_zero(), "{}", stake.stake);
    }
    // Smaller fractions never recommend more
    assert!(rec.stakes.windows(2).all(|w| w[0].stake >= w[1].stake));
}

#[test]
fn test_rounding_ties_go_down() {
    assert_eq!(round_to_nearest_five_cents(dec!(1.024)), dec!(1.00));
    assert_eq!(round_to_nearest_five_cents(dec!(1.0251)), dec!(1.05));
    assert_eq!(round_to_nearest_five_cents(dec!(1.025)), dec!(1.00));
}
