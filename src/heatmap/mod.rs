//! Market/odds performance heatmap
//!
//! Buckets settled bets by market family and odds bracket, rates each cell
//! and maps ROI onto a red-amber-green scale. Rendering lives in [`render`].

mod color;
mod market;
mod matrix;
mod odds;
pub mod render;

pub use color::{roi_to_color, Rgb};
pub use market::{classify_market, MarketCategory, MARKET_ORDER};
pub use matrix::{
    build_heatmap, HeatmapCell, HeatmapMatrix, PerformanceNote, PerformanceRating, RoiRow,
    SampleQualifier, MIN_RATED_SAMPLE,
};
pub use odds::{classify_odds_range, OddsRange, ODDS_ORDER};
