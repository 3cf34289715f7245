//! Usage counters
//!
//! Recorded through the `metrics` facade; without an installed recorder the
//! calls are no-ops.

use crate::data::DropReason;
use crate::staking::{KellyError, KellyRecommendation};

/// Rows turned into bet records
pub fn record_rows_ingested(count: usize) {
    ::metrics::counter!("betanalytix_rows_ingested_total").increment(count as u64);
}

/// A row excluded during ingestion
pub fn record_row_dropped(reason: DropReason) {
    ::metrics::counter!("betanalytix_rows_dropped_total", "reason" => reason.as_str()).increment(1);
}

/// Outcome label of a Kelly request
pub fn kelly_result_label(result: &Result<KellyRecommendation, KellyError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(KellyError::Invalid(_)) => "invalid",
        Err(KellyError::NoEdge { .. }) => "no_edge",
    }
}

pub fn record_kelly_request(result: &Result<KellyRecommendation, KellyError>) {
    let label = kelly_result_label(result);
    ::metrics::counter!("betanalytix_kelly_requests_total", "result" => label).increment(1);
}

/// Populated cells in the last heatmap built
pub fn record_heatmap_cells(cells: usize) {
    ::metrics::gauge!("betanalytix_heatmap_cells").set(cells as f64);
}
