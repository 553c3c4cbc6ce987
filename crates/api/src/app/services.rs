//! Service wiring: one set of in-memory stores shared by every service.

use std::sync::Arc;

use stockbook_infra::{
    InMemoryMovementStore, InMemoryOrderStore, InMemoryProductStore, InMemorySupplierStore,
};
use stockbook_ledger::StockLedger;
use stockbook_products::ProductCatalog;
use stockbook_purchasing::OrderService;
use stockbook_suppliers::SupplierDirectory;

pub type Ledger = StockLedger<InMemoryProductStore, InMemoryMovementStore>;
pub type Orders = OrderService<
    InMemoryOrderStore,
    InMemorySupplierStore,
    InMemoryProductStore,
    InMemoryMovementStore,
>;

pub struct AppServices {
    pub catalog: ProductCatalog<InMemoryProductStore>,
    pub suppliers: SupplierDirectory<InMemorySupplierStore>,
    pub ledger: Arc<Ledger>,
    pub orders: Orders,
}

pub fn build_services() -> AppServices {
    let products = Arc::new(InMemoryProductStore::new());
    let suppliers = Arc::new(InMemorySupplierStore::new());
    let movements = Arc::new(InMemoryMovementStore::new());
    let orders = Arc::new(InMemoryOrderStore::new());

    let ledger = Arc::new(StockLedger::new(products.clone(), movements));
    AppServices {
        catalog: ProductCatalog::new(products.clone()),
        suppliers: SupplierDirectory::new(suppliers.clone()),
        ledger: ledger.clone(),
        orders: OrderService::new(orders, suppliers, products, ledger),
    }
}
