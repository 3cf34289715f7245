//! Backtest statistics
//!
//! Aggregates a bet history into performance, risk and sample-size figures

mod analytics;
mod pipeline;
pub mod stats;
mod verdict;

pub use analytics::{BacktestSummary, ConfidenceInterval};
pub use pipeline::{summarize, summarize_backtest, SummaryOptions};
pub use verdict::{
    RiskAssessment, RiskBand, SampleSizeVerdict, SharpeRating, PARTIAL_SAMPLE, SOLID_SAMPLE,
};
