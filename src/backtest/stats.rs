//! Statistical helpers over decimal series

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// z-score for a two-sided 95% interval
const Z_95: Decimal = dec!(1.96);

/// Trading days per year used to annualize daily Sharpe
const DAYS_PER_YEAR: u32 = 365;

/// Arithmetic mean, `None` for an empty series
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<Decimal>() / Decimal::from(values.len()))
}

/// Sample standard deviation (n - 1 denominator), `None` below two points
pub fn sample_std_dev(values: &[Decimal]) -> Option<Decimal> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let squared: Decimal = values
        .iter()
        .map(|v| {
            let deviation = *v - mean;
            deviation * deviation
        })
        .sum();
    let variance = squared / Decimal::from(values.len() - 1);
    variance.sqrt()
}

/// Largest decline of cumulative profit from its running peak
///
/// Returned as a non-positive number. Profits must already be in
/// chronological order. The peak starts at the first cumulative value, not
/// at zero.
pub fn max_drawdown(profits: &[Decimal]) -> Decimal {
    let mut cumulative = Decimal::ZERO;
    let mut peak: Option<Decimal> = None;
    let mut worst = Decimal::ZERO;

    for profit in profits {
        cumulative += *profit;
        let current_peak = peak.map_or(cumulative, |p| p.max(cumulative));
        peak = Some(current_peak);
        worst = worst.min(cumulative - current_peak);
    }

    worst
}

/// Sum profit per calendar day, in date order
///
/// With `fill_idle_days` every day between the first and last active day is
/// present, idle days contributing zero.
pub fn daily_profits(points: &[(NaiveDate, Decimal)], fill_idle_days: bool) -> Vec<Decimal> {
    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for (day, profit) in points {
        *by_day.entry(*day).or_insert(Decimal::ZERO) += *profit;
    }

    if !fill_idle_days {
        return by_day.into_values().collect();
    }

    let (Some(&first), Some(&last)) = (by_day.keys().next(), by_day.keys().next_back()) else {
        return Vec::new();
    };

    let mut filled = Vec::new();
    let mut day = first;
    while day <= last {
        filled.push(by_day.get(&day).copied().unwrap_or(Decimal::ZERO));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    filled
}

/// Annualized Sharpe ratio of daily profits
///
/// Zero when fewer than two days are available or the series has no
/// dispersion.
pub fn sharpe_ratio(daily: &[Decimal]) -> Decimal {
    if daily.len() < 2 {
        return Decimal::ZERO;
    }
    let (Some(mean), Some(std)) = (mean(daily), sample_std_dev(daily)) else {
        return Decimal::ZERO;
    };
    if std.is_zero() {
        return Decimal::ZERO;
    }
    let annualization = Decimal::from(DAYS_PER_YEAR).sqrt().unwrap_or(Decimal::ONE);
    mean / std * annualization
}

/// 95% normal-approximation interval on a win rate, in percent
///
/// Bounds are clamped to [0, 100]; an empty sample yields (0, 0).
pub fn win_rate_interval(wins: usize, total: usize) -> (Decimal, Decimal) {
    if total == 0 {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    let n = Decimal::from(total);
    let p = Decimal::from(wins) / n;
    let margin = Z_95 * (p * (Decimal::ONE - p) / n).sqrt().unwrap_or(Decimal::ZERO);

    let hundred = dec!(100);
    let lower = ((p - margin) * hundred).max(Decimal::ZERO);
    let upper = ((p + margin) * hundred).min(hundred);
    (lower, upper)
}
