//! Decimal price normalization
//!
//! Submitted prices are stored truncated to 2 decimal places (truncation,
//! not rounding, sign-correct toward zero: -100.999 becomes -100.99).
//! Price-band edges, by contrast, are rounded; that asymmetry is pinned by
//! tests here and in the matching engine.

use rust_decimal::Decimal;

/// Truncate a price to 2 decimal places, toward zero.
///
/// 10.9999 -> 10.99, -100.999 -> -100.99
pub fn truncate_price(value: Decimal) -> Decimal {
    value.trunc_with_scale(2)
}

/// Render a price the way it appears in response messages: no trailing
/// zeros (110 rather than 110.00, 95.6 rather than 95.60).
pub fn display_price(value: Decimal) -> Decimal {
    value.normalize()
}
