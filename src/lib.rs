//! bet-analytix: analytics toolkit for sports-betting histories
//!
//! This library provides the core components for:
//! - Fractional Kelly stake sizing with 5-cent rounding
//! - Bet history ingestion from bookmaker exports
//! - Backtest statistics: ROI, drawdown, Sharpe ratio, win-rate interval
//! - Market/odds performance heatmaps with ROI colour mapping
//! - Structured logging and usage metrics

pub mod backtest;
pub mod cli;
pub mod config;
pub mod data;
pub mod heatmap;
pub mod staking;
pub mod telemetry;
