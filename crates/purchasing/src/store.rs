//! Persistence port for purchase orders.

use stockbook_core::{OrderId, StoreError};

use crate::order::PurchaseOrder;

pub trait OrderStore: Send + Sync {
    fn insert(&self, order: PurchaseOrder) -> Result<(), StoreError>;

    fn get(&self, id: OrderId) -> Result<Option<PurchaseOrder>, StoreError>;

    fn save(&self, order: PurchaseOrder) -> Result<(), StoreError>;

    /// Remove an order and its lines. Returns whether it existed.
    fn remove(&self, id: OrderId) -> Result<bool, StoreError>;

    fn list(&self) -> Result<Vec<PurchaseOrder>, StoreError>;
}
