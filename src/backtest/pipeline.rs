//! Backtest statistics pipeline
//!
//! Each stage takes an immutable view of its input and returns new values;
//! caller-owned records are never modified.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::analytics::{BacktestSummary, ConfidenceInterval};
use super::stats;
use super::verdict::{RiskAssessment, SampleSizeVerdict};
use crate::config::BacktestConfig;
use crate::data::{BetRecord, Outcome};

/// Pipeline switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Count idle calendar days as zero-profit days in the Sharpe ratio
    pub fill_idle_days: bool,
}

impl SummaryOptions {
    pub fn from_config(config: &BacktestConfig) -> Self {
        Self {
            fill_idle_days: config.fill_idle_days,
        }
    }
}

/// A won or lost bet with its profit resolved
#[derive(Debug, Clone, Copy, PartialEq)]
struct SettledBet {
    placed_at: NaiveDateTime,
    stake: Decimal,
    odds: Decimal,
    profit: Decimal,
}

/// Outcome tallies over every record passed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct OutcomeCounts {
    wins: usize,
    losses: usize,
    voids: usize,
}

impl OutcomeCounts {
    fn tally(records: &[BetRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            match r.outcome {
                Outcome::Won => acc.wins += 1,
                Outcome::Lost => acc.losses += 1,
                Outcome::Void => acc.voids += 1,
            }
            acc
        })
    }

    fn total(&self) -> usize {
        self.wins + self.losses + self.voids
    }
}

/// Stages 1 and 2: keep won/lost bets and resolve their profit
fn settle(records: &[BetRecord]) -> Vec<SettledBet> {
    records
        .iter()
        .filter(|r| r.is_settled())
        .map(|r| SettledBet {
            placed_at: r.placed_at,
            stake: r.stake,
            odds: r.odds,
            profit: r.resolved_profit(),
        })
        .collect()
}

fn percentage(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator * dec!(100)
    }
}

/// Drawdown over bets in placement order (stable for equal timestamps)
fn chronological_drawdown(settled: &[SettledBet]) -> Decimal {
    let mut ordered = settled.to_vec();
    ordered.sort_by_key(|b| b.placed_at);
    let profits: Vec<Decimal> = ordered.iter().map(|b| b.profit).collect();
    stats::max_drawdown(&profits)
}

fn daily_sharpe(settled: &[SettledBet], options: &SummaryOptions) -> Decimal {
    let points: Vec<_> = settled
        .iter()
        .map(|b| (b.placed_at.date(), b.profit))
        .collect();
    let daily = stats::daily_profits(&points, options.fill_idle_days);
    stats::sharpe_ratio(&daily)
}

/// Compute performance statistics for a bet history
///
/// Void bets count towards the totals and the win-rate denominator but are
/// left out of odds, stake, profit and risk figures.
pub fn summarize(records: &[BetRecord], options: &SummaryOptions) -> BacktestSummary {
    let counts = OutcomeCounts::tally(records);
    let total_bets = counts.total();
    let settled = settle(records);

    let win_rate = percentage(Decimal::from(counts.wins), Decimal::from(total_bets));

    let odds: Vec<Decimal> = settled.iter().map(|b| b.odds).collect();
    let avg_odds = stats::mean(&odds).unwrap_or(Decimal::ZERO);

    let total_staked: Decimal = settled.iter().map(|b| b.stake).sum();
    let profits: Vec<Decimal> = settled.iter().map(|b| b.profit).collect();
    let total_profit: Decimal = profits.iter().sum();
    let roi = percentage(total_profit, total_staked);

    let max_drawdown = chronological_drawdown(&settled);
    let sharpe_ratio = daily_sharpe(&settled, options);

    let (lower, upper) = stats::win_rate_interval(counts.wins, total_bets);

    let risk = RiskAssessment::assess(
        stats::sample_std_dev(&profits),
        stats::mean(&profits),
        sharpe_ratio,
    );

    let summary = BacktestSummary {
        total_bets,
        wins: counts.wins,
        losses: counts.losses,
        voids: counts.voids,
        win_rate,
        avg_odds,
        total_staked,
        total_profit,
        roi,
        max_drawdown,
        sharpe_ratio,
        confidence_interval: ConfidenceInterval { lower, upper },
        risk,
        sample_size: SampleSizeVerdict::from_total(total_bets),
    };

    tracing::debug!(
        total = summary.total_bets,
        win_rate = %summary.win_rate,
        roi = %summary.roi,
        "Backtest summarized"
    );

    summary
}

/// Summarize with default options
pub fn summarize_backtest(records: &[BetRecord]) -> BacktestSummary {
    summarize(records, &SummaryOptions::default())
}
