//! Purchasing domain module (supplier purchase orders).
//!
//! The order lifecycle is the second half of the core: a state machine over
//! `PENDING → VALIDATED → DELIVERED` (with `CANCELLED` reachable from the
//! first two) whose transitions drive stock movements through the ledger.

pub mod order;
pub mod service;
pub mod store;

pub use order::{NewOrderLine, OrderLine, OrderStatus, PurchaseOrder};
pub use service::{CreateOrder, OrderService};
pub use store::OrderStore;
