//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod lock;
pub mod money;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, ServiceError, ServiceResult, StoreError};
pub use id::{MovementId, OrderId, ProductId, SupplierId};
pub use lock::{acquire, KeyLock, LockMap};
pub use money::{line_subtotal, round2};
