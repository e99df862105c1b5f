//! Money helpers
//!
//! All rupee amounts are `Decimal`, rounded to 2 places half-up where
//! they are produced.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Largest accepted single payment (₹1,000,000)
pub const MAX_PAYMENT_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Largest accepted quantity per order
pub const MAX_QUANTITY: u32 = 9999;

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `quantity × rate`, rounded
pub fn line_total(quantity: u32, rate: Decimal) -> Decimal {
    round_money(Decimal::from(quantity) * rate)
}

/// Render an amount the way bills show it: no trailing zeros (`40`, `12.5`)
pub fn format_rupees(value: Decimal) -> String {
    value.normalize().to_string()
}
