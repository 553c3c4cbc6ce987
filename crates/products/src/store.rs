//! Persistence port for products.

use stockbook_core::{ProductId, StoreError};

use crate::product::Product;

/// Storage abstraction for products.
///
/// The stock ledger performs read-modify-write sequences through this trait;
/// callers are responsible for serializing writes to the same product (see
/// `StockLedger`).
pub trait ProductStore: Send + Sync {
    /// Insert a newly created product (ids are freshly generated, never reused).
    fn insert(&self, product: Product) -> Result<(), StoreError>;

    fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Write back a modified product. The product must already exist.
    fn save(&self, product: Product) -> Result<(), StoreError>;

    /// Remove a product. Returns whether it existed.
    fn remove(&self, id: ProductId) -> Result<bool, StoreError>;

    fn list(&self) -> Result<Vec<Product>, StoreError>;
}
