//! Persistence port for the movement log.

use stockbook_core::{MovementId, OrderId, ProductId, StoreError};

use crate::movement::{MovementKind, StockMovement};

/// Append-only storage for stock movements.
///
/// The trait surface deliberately has no update or delete: the movement log
/// is the audit trail of all valuation changes.
pub trait MovementStore: Send + Sync {
    fn append(&self, movement: StockMovement) -> Result<(), StoreError>;

    fn get(&self, id: MovementId) -> Result<Option<StockMovement>, StoreError>;

    fn list(&self) -> Result<Vec<StockMovement>, StoreError>;

    fn list_for_product(&self, product_id: ProductId) -> Result<Vec<StockMovement>, StoreError>;

    fn list_for_order(&self, order_id: OrderId) -> Result<Vec<StockMovement>, StoreError>;

    fn list_by_kind(&self, kind: MovementKind) -> Result<Vec<StockMovement>, StoreError>;
}
