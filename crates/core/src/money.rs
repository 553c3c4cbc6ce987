//! Monetary arithmetic helpers.
//!
//! All monetary math uses exact decimal arithmetic. Rounding happens only at
//! the points the valuation policy calls for, never on intermediate sums.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to two decimal places using round-half-up.
///
/// All monetary values in this system are non-negative, so half-away-from-zero
/// and half-up coincide.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sub-total of an order line: quantity × unit price, exact (no rounding).
pub fn line_subtotal(quantity: i64, unit_price: Decimal) -> Decimal {
    unit_price * Decimal::from(quantity)
}
