//! In-memory store adapters.
//!
//! Intended for tests, development and single-process deployments. Maps are
//! guarded by `RwLock`; the per-entity serialization that makes
//! read-modify-write sequences safe lives in the services, not here.

use std::collections::HashMap;
use std::sync::RwLock;

use stockbook_core::{MovementId, OrderId, ProductId, StoreError, SupplierId};
use stockbook_ledger::{MovementKind, MovementStore, StockMovement};
use stockbook_products::{Product, ProductStore};
use stockbook_purchasing::{OrderStore, PurchaseOrder};
use stockbook_suppliers::{Supplier, SupplierStore};

fn poisoned() -> StoreError {
    StoreError::unavailable("lock poisoned")
}

/// In-memory product store.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    items: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryProductStore {
    fn insert(&self, product: Product) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.insert(product.id_typed(), product);
        Ok(())
    }

    fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(&id).cloned())
    }

    fn save(&self, product: Product) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.insert(product.id_typed(), product);
        Ok(())
    }

    fn remove(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        Ok(items.remove(&id).is_some())
    }

    fn list(&self) -> Result<Vec<Product>, StoreError> {
        let items = self.items.read().map_err(|_| poisoned())?;
        let mut all: Vec<Product> = items.values().cloned().collect();
        all.sort_by_key(|p| p.id_typed());
        Ok(all)
    }
}

/// In-memory supplier store.
#[derive(Debug, Default)]
pub struct InMemorySupplierStore {
    items: RwLock<HashMap<SupplierId, Supplier>>,
}

impl InMemorySupplierStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SupplierStore for InMemorySupplierStore {
    fn insert(&self, supplier: Supplier) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.insert(supplier.id_typed(), supplier);
        Ok(())
    }

    fn get(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(&id).cloned())
    }

    fn save(&self, supplier: Supplier) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.insert(supplier.id_typed(), supplier);
        Ok(())
    }

    fn remove(&self, id: SupplierId) -> Result<bool, StoreError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        Ok(items.remove(&id).is_some())
    }

    fn list(&self) -> Result<Vec<Supplier>, StoreError> {
        let items = self.items.read().map_err(|_| poisoned())?;
        let mut all: Vec<Supplier> = items.values().cloned().collect();
        all.sort_by_key(|s| s.id_typed());
        Ok(all)
    }

    fn email_taken(&self, email: &str, except: Option<SupplierId>) -> Result<bool, StoreError> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items
            .values()
            .any(|s| s.email() == Some(email) && Some(s.id_typed()) != except))
    }

    fn ice_taken(&self, ice: &str, except: Option<SupplierId>) -> Result<bool, StoreError> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items
            .values()
            .any(|s| s.ice() == Some(ice) && Some(s.id_typed()) != except))
    }
}

/// In-memory purchase order store.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    items: RwLock<HashMap<OrderId, PurchaseOrder>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert(&self, order: PurchaseOrder) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.insert(order.id_typed(), order);
        Ok(())
    }

    fn get(&self, id: OrderId) -> Result<Option<PurchaseOrder>, StoreError> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(&id).cloned())
    }

    fn save(&self, order: PurchaseOrder) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.insert(order.id_typed(), order);
        Ok(())
    }

    fn remove(&self, id: OrderId) -> Result<bool, StoreError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        Ok(items.remove(&id).is_some())
    }

    fn list(&self) -> Result<Vec<PurchaseOrder>, StoreError> {
        let items = self.items.read().map_err(|_| poisoned())?;
        let mut all: Vec<PurchaseOrder> = items.values().cloned().collect();
        all.sort_by_key(|o| o.id_typed());
        Ok(all)
    }
}

/// In-memory append-only movement log.
///
/// Movements are stored in append order; there is no way to update or delete
/// one through this type.
#[derive(Debug, Default)]
pub struct InMemoryMovementStore {
    log: RwLock<Vec<StockMovement>>,
}

impl InMemoryMovementStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovementStore for InMemoryMovementStore {
    fn append(&self, movement: StockMovement) -> Result<(), StoreError> {
        let mut log = self.log.write().map_err(|_| poisoned())?;
        log.push(movement);
        Ok(())
    }

    fn get(&self, id: MovementId) -> Result<Option<StockMovement>, StoreError> {
        let log = self.log.read().map_err(|_| poisoned())?;
        Ok(log.iter().find(|m| m.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<StockMovement>, StoreError> {
        let log = self.log.read().map_err(|_| poisoned())?;
        Ok(log.clone())
    }

    fn list_for_product(&self, product_id: ProductId) -> Result<Vec<StockMovement>, StoreError> {
        let log = self.log.read().map_err(|_| poisoned())?;
        Ok(log
            .iter()
            .filter(|m| m.product_id == product_id)
            .cloned()
            .collect())
    }

    fn list_for_order(&self, order_id: OrderId) -> Result<Vec<StockMovement>, StoreError> {
        let log = self.log.read().map_err(|_| poisoned())?;
        Ok(log
            .iter()
            .filter(|m| m.order_id == Some(order_id))
            .cloned()
            .collect())
    }

    fn list_by_kind(&self, kind: MovementKind) -> Result<Vec<StockMovement>, StoreError> {
        let log = self.log.read().map_err(|_| poisoned())?;
        Ok(log.iter().filter(|m| m.kind == kind).cloned().collect())
    }
}
