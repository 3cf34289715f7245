//! Kelly criterion stake sizing
//!
//! For decimal odds `o` and estimated win probability `p`:
//!     f* = (o*p - 1) / (o - 1)
//!
//! Full Kelly is far too aggressive for noisy probability estimates, so the
//! recommendation is expressed at four fixed fractions of it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::rounding::checked_round_to_nearest_five_cents;
use super::types::{
    AdvantageJudgment, FractionalStake, KellyError, KellyRecommendation, ValidationError,
};

/// Denominators of the fractional Kelly levels, in output order
pub const KELLY_DENOMINATORS: [u32; 4] = [8, 10, 15, 20];

/// Kelly criterion calculator for single decimal-odds bets
#[derive(Debug, Clone)]
pub struct KellyCalculator {
    /// Fraction denominators (1/n of full Kelly)
    denominators: [u32; 4],
}

impl KellyCalculator {
    /// Create a calculator with the standard 1/8, 1/10, 1/15, 1/20 levels
    pub fn new() -> Self {
        Self {
            denominators: KELLY_DENOMINATORS,
        }
    }

    /// Validate inputs in order: odds, probability, bankroll
    pub fn validate(
        odds: Decimal,
        probability: Decimal,
        bankroll: Decimal,
    ) -> Result<(), ValidationError> {
        if odds <= Decimal::ONE {
            return Err(ValidationError::OddsTooLow(odds));
        }
        if probability <= Decimal::ZERO || probability >= Decimal::ONE {
            return Err(ValidationError::ProbabilityOutOfRange(probability));
        }
        if bankroll <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveBankroll(bankroll));
        }
        Ok(())
    }

    /// Full Kelly fraction; callers must have validated `odds > 1`
    pub fn kelly_fraction(odds: Decimal, probability: Decimal) -> Decimal {
        (odds * probability - Decimal::ONE) / (odds - Decimal::ONE)
    }

    /// Size a bet
    pub fn calculate(
        &self,
        odds: Decimal,
        probability: Decimal,
        bankroll: Decimal,
    ) -> Result<KellyRecommendation, KellyError> {
        Self::validate(odds, probability, bankroll)?;

        let kelly_fraction = Self::kelly_fraction(odds, probability);
        if kelly_fraction <= Decimal::ZERO {
            return Err(KellyError::NoEdge { kelly_fraction });
        }

        let implied_probability = Decimal::ONE / odds;
        let is_value_bet = probability > implied_probability;
        let ev_per_unit = probability * (odds - Decimal::ONE) - (Decimal::ONE - probability);

        // implied_probability underflows to zero only for astronomically large odds
        let advantage_pct = if implied_probability > Decimal::ZERO {
            ((probability - implied_probability) / implied_probability)
                .checked_mul(dec!(100))
                .ok_or(ValidationError::OutOfRange("advantage"))?
        } else {
            Decimal::ZERO
        };

        let stakes = self
            .denominators
            .iter()
            .map(|&d| Self::fractional_stake(kelly_fraction, odds, bankroll, d))
            .collect::<Result<Vec<_>, _>>()?;

        let expected_profit_pct = ev_per_unit
            .checked_mul(dec!(100))
            .ok_or(ValidationError::OutOfRange("expected profit"))?;

        Ok(KellyRecommendation {
            odds,
            probability,
            bankroll,
            kelly_fraction,
            implied_probability,
            is_value_bet,
            ev_per_unit,
            advantage_pct,
            advantage: AdvantageJudgment::from_advantage_pct(advantage_pct),
            stakes,
            expected_profit_pct,
        })
    }

    fn fractional_stake(
        kelly_fraction: Decimal,
        odds: Decimal,
        bankroll: Decimal,
        denominator: u32,
    ) -> Result<FractionalStake, ValidationError> {
        let stake = kelly_fraction
            .checked_mul(bankroll)
            .and_then(|v| v.checked_div(Decimal::from(denominator)))
            .and_then(checked_round_to_nearest_five_cents)
            .ok_or(ValidationError::OutOfRange("stake"))?;
        let stake_pct = stake
            .checked_div(bankroll)
            .and_then(|v| v.checked_mul(dec!(100)))
            .ok_or(ValidationError::OutOfRange("stake"))?;
        let payout = stake
            .checked_mul(odds)
            .ok_or(ValidationError::OutOfRange("payout"))?;

        Ok(FractionalStake {
            label: format!("1/{denominator}"),
            stake,
            stake_pct,
            payout,
        })
    }
}

impl Default for KellyCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Size a bet with the standard fractional Kelly levels
pub fn compute_kelly(
    odds: Decimal,
    probability: Decimal,
    bankroll: Decimal,
) -> Result<KellyRecommendation, KellyError> {
    let result = KellyCalculator::new().calculate(odds, probability, bankroll);
    match &result {
        Ok(rec) => tracing::debug!(
            %odds,
            %probability,
            kelly_fraction = %rec.kelly_fraction,
            "Kelly sizing computed"
        ),
        Err(e) => tracing::debug!(%odds, %probability, error = %e, "Kelly sizing rejected"),
    }
    crate::telemetry::record_kelly_request(&result);
    result
}
