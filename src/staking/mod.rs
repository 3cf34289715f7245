//! Stake sizing
//!
//! Kelly criterion recommendations and bookmaker-friendly rounding

mod kelly;
mod rounding;
mod types;

pub use kelly::{compute_kelly, KellyCalculator, KELLY_DENOMINATORS};
pub use rounding::{checked_round_to_nearest_five_cents, round_to_nearest_five_cents};
pub use types::{
    AdvantageJudgment, FractionalStake, KellyError, KellyRecommendation, ValidationError,
};
