//! Bet history ingestion
//!
//! Loads bookmaker exports into cleaned records for analysis

mod loader;
mod period;
mod record;
mod types;

pub use loader::{parse_datetime, parse_decimal, BetCsvReader};
pub use period::Period;
pub use record::{BetRecord, Outcome};
pub use types::{DataError, DropReason, IngestReport, Ingested};
