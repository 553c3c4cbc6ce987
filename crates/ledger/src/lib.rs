//! Stock ledger: the append-only movement log and the weighted-average
//! valuation it maintains.
//!
//! The ledger is the sole writer of a product's on-hand quantity and
//! weighted-average unit cost. Every stock change is recorded as an immutable
//! [`StockMovement`] before the product is updated, and operations touching
//! the same product are serialized.

pub mod ledger;
pub mod movement;
pub mod store;
pub mod valuation;

pub use ledger::StockLedger;
pub use movement::{MovementKind, StockMovement};
pub use store::MovementStore;
pub use valuation::weighted_average_cost;
