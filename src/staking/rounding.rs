//! Monetary rounding to bookmaker stake increments

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Smallest stake increment accepted by bookmakers, in cents
const INCREMENT_CENTS: Decimal = dec!(5);

/// Round an amount to the nearest multiple of 0.05
///
/// Works on the cents-scaled value so no binary floating point error can
/// leak into the result. When the amount sits exactly between two
/// multiples the lower one wins.
pub fn round_to_nearest_five_cents(amount: Decimal) -> Decimal {
    checked_round_to_nearest_five_cents(amount).unwrap_or(amount)
}

/// Like [`round_to_nearest_five_cents`], `None` if the result is not representable
///
/// Only the fractional part is scaled to cents: the whole part is already a
/// multiple of 0.05, so amounts up to `Decimal::MAX` round without overflow.
pub fn checked_round_to_nearest_five_cents(amount: Decimal) -> Option<Decimal> {
    let whole = amount.trunc();
    let fraction = amount - whole;
    let cents = fraction * dec!(100);

    let floor_fraction = (cents / INCREMENT_CENTS).floor() * INCREMENT_CENTS / dec!(100);
    let ceil_fraction = (cents / INCREMENT_CENTS).ceil() * INCREMENT_CENTS / dec!(100);

    let nearest = if (fraction - floor_fraction).abs() <= (fraction - ceil_fraction).abs() {
        floor_fraction
    } else {
        ceil_fraction
    };
    whole.checked_add(nearest).map(|v| v.normalize())
}
