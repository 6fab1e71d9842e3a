//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done with `Decimal` internally, then
//! converted back to `f64` for the wire.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.005, half a cent).
///
/// Absorbs float round-trip artifacts without ever accepting an amount
/// that is a whole cent short.
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Whether `tendered` covers `total` within money tolerance
#[inline]
pub fn covers(tendered: f64, total: f64) -> bool {
    to_decimal(tendered) >= to_decimal(total) - MONEY_TOLERANCE
}

/// Change due: `tendered - total`, rounded. Negative means insufficient.
#[inline]
pub fn change(tendered: f64, total: f64) -> f64 {
    to_f64(to_decimal(tendered) - to_decimal(total))
}
