//! Weighted-average cost (CUMP) valuation.
//!
//! Formula: ((Q0 × C0) + (Qi × Ci)) / (Q0 + Qi), rounded half-up to two
//! decimal places. Invoked only when recording an ENTRY movement; exits and
//! adjustments never change the cost basis.

use rust_decimal::Decimal;

use stockbook_core::round2;

/// Compute the new weighted-average unit cost after receiving
/// `incoming_quantity` units at `incoming_cost`.
///
/// A previously empty stock takes the incoming cost as its baseline (and
/// avoids the division by zero).
pub fn weighted_average_cost(
    on_hand: i64,
    current_cost: Decimal,
    incoming_quantity: i64,
    incoming_cost: Decimal,
) -> Decimal {
    if on_hand == 0 {
        return incoming_cost;
    }

    let held_value = current_cost * Decimal::from(on_hand);
    let incoming_value = incoming_cost * Decimal::from(incoming_quantity);
    round2((held_value + incoming_value) / Decimal::from(on_hand + incoming_quantity))
}
