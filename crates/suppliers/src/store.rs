//! Persistence port for suppliers.

use stockbook_core::{StoreError, SupplierId};

use crate::supplier::Supplier;

pub trait SupplierStore: Send + Sync {
    fn insert(&self, supplier: Supplier) -> Result<(), StoreError>;

    fn get(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError>;

    fn save(&self, supplier: Supplier) -> Result<(), StoreError>;

    fn remove(&self, id: SupplierId) -> Result<bool, StoreError>;

    fn list(&self) -> Result<Vec<Supplier>, StoreError>;

    /// Uniqueness probe for email, excluding `except` when updating.
    fn email_taken(&self, email: &str, except: Option<SupplierId>) -> Result<bool, StoreError>;

    /// Uniqueness probe for the ICE registration number.
    fn ice_taken(&self, ice: &str, except: Option<SupplierId>) -> Result<bool, StoreError>;
}
