//! Market x odds performance matrix

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::market::{classify_market, MarketCategory, MARKET_ORDER};
use super::odds::{classify_odds_range, OddsRange, ODDS_ORDER};
use crate::data::{BetRecord, Outcome};

/// Below this many bets a cell is not rated
pub const MIN_RATED_SAMPLE: usize = 5;
const REDUCED_SAMPLE: usize = 20;
const MINIMAL_SAMPLE: usize = 50;

/// Base rating from a cell's ROI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceRating {
    Excellent,
    Good,
    Fair,
    Marginal,
    Ineffective,
}

impl PerformanceRating {
    pub fn from_roi(roi: Decimal) -> Self {
        if roi > dec!(10) {
            PerformanceRating::Excellent
        } else if roi > dec!(5) {
            PerformanceRating::Good
        } else if roi > Decimal::ZERO {
            PerformanceRating::Fair
        } else if roi > dec!(-5) {
            PerformanceRating::Marginal
        } else {
            PerformanceRating::Ineffective
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceRating::Excellent => "Excellent",
            PerformanceRating::Good => "Good",
            PerformanceRating::Fair => "Fair",
            PerformanceRating::Marginal => "Marginal",
            PerformanceRating::Ineffective => "Ineffective",
        }
    }
}

/// Caveat attached to ratings drawn from small cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleQualifier {
    Reduced,
    Minimal,
}

impl SampleQualifier {
    fn from_total(total: usize) -> Option<Self> {
        if total < REDUCED_SAMPLE {
            Some(SampleQualifier::Reduced)
        } else if total < MINIMAL_SAMPLE {
            Some(SampleQualifier::Minimal)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SampleQualifier::Reduced => "reduced sample",
            SampleQualifier::Minimal => "minimal sample",
        }
    }
}

/// Human-readable verdict for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PerformanceNote {
    InsufficientSample,
    Rated {
        rating: PerformanceRating,
        qualifier: Option<SampleQualifier>,
    },
}

impl PerformanceNote {
    pub fn assess(total: usize, roi: Decimal) -> Self {
        if total < MIN_RATED_SAMPLE {
            return PerformanceNote::InsufficientSample;
        }
        PerformanceNote::Rated {
            rating: PerformanceRating::from_roi(roi),
            qualifier: SampleQualifier::from_total(total),
        }
    }
}

impl fmt::Display for PerformanceNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceNote::InsufficientSample => write!(f, "Insufficient sample"),
            PerformanceNote::Rated {
                rating,
                qualifier: Some(q),
            } => write!(f, "{} ({})", rating.label(), q.label()),
            PerformanceNote::Rated {
                rating,
                qualifier: None,
            } => write!(f, "{}", rating.label()),
        }
    }
}

/// Aggregated figures for one market/odds pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub market: MarketCategory,
    pub odds_range: OddsRange,
    pub wins: usize,
    pub total: usize,
    pub total_staked: Decimal,
    pub total_profit: Decimal,
    /// Wins over settled bets, in percent
    pub win_rate: Decimal,
    /// Profit over stake, in percent; -100 when nothing was staked
    pub roi: Decimal,
    pub note: PerformanceNote,
}

#[derive(Debug, Default)]
struct CellAccumulator {
    wins: usize,
    total: usize,
    stake: Decimal,
    profit: Decimal,
}

impl CellAccumulator {
    fn add(&mut self, record: &BetRecord) {
        self.total += 1;
        if record.outcome == Outcome::Won {
            self.wins += 1;
        }
        self.stake += record.stake;
        self.profit += record.resolved_profit();
    }

    fn finalize(self, market: MarketCategory, odds_range: OddsRange) -> HeatmapCell {
        let win_rate = if self.total == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(self.wins) / Decimal::from(self.total) * dec!(100)
        };
        let roi = if self.stake.is_zero() {
            dec!(-100)
        } else {
            self.profit / self.stake * dec!(100)
        };

        HeatmapCell {
            market,
            odds_range,
            wins: self.wins,
            total: self.total,
            total_staked: self.stake,
            total_profit: self.profit,
            win_rate,
            roi,
            note: PerformanceNote::assess(self.total, roi),
        }
    }
}

/// One market's ROI across the odds brackets, `None` where no bets landed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiRow {
    pub market: MarketCategory,
    pub roi: Vec<Option<Decimal>>,
}

/// Performance grid over market categories and odds brackets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapMatrix {
    /// Populated cells, sorted by market then odds priority
    pub cells: Vec<HeatmapCell>,
    pub market_order: Vec<MarketCategory>,
    pub odds_order: Vec<OddsRange>,
}

impl HeatmapMatrix {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, market: MarketCategory, odds_range: OddsRange) -> Option<&HeatmapCell> {
        self.cells
            .iter()
            .find(|c| c.market == market && c.odds_range == odds_range)
    }

    /// Settled bets across all cells
    pub fn sample_size(&self) -> usize {
        self.cells.iter().map(|c| c.total).sum()
    }

    /// ROI pivot: one row per market, one entry per odds bracket
    pub fn roi_table(&self) -> Vec<RoiRow> {
        self.market_order
            .iter()
            .map(|&market| RoiRow {
                market,
                roi: self
                    .odds_order
                    .iter()
                    .map(|&range| self.get(market, range).map(|c| c.roi))
                    .collect(),
            })
            .collect()
    }
}

/// Build the market/odds matrix from won and lost bets
pub fn build_heatmap(records: &[BetRecord]) -> HeatmapMatrix {
    let mut accumulators: HashMap<(MarketCategory, OddsRange), CellAccumulator> = HashMap::new();

    for record in records.iter().filter(|r| r.is_settled()) {
        let range = classify_odds_range(Some(record.odds));
        if range == OddsRange::NotAvailable {
            continue;
        }
        let market = classify_market(record.market_title.as_deref());
        accumulators.entry((market, range)).or_default().add(record);
    }

    let mut cells: Vec<HeatmapCell> = accumulators
        .into_iter()
        .map(|((market, range), acc)| acc.finalize(market, range))
        .collect();
    cells.sort_by_key(|c| (c.market.priority(), c.odds_range.priority()));

    tracing::debug!(cells = cells.len(), "Heatmap built");
    crate::telemetry::record_heatmap_cells(cells.len());

    HeatmapMatrix {
        cells,
        market_order: MARKET_ORDER.to_vec(),
        odds_order: ODDS_ORDER.to_vec(),
    }
}
