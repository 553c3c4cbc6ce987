//! Integration tests for the ledger + order lifecycle over the in-memory
//! stores: every stock-affecting path, the state-machine guards, and the
//! no-partial-state rule.

use std::sync::Arc;

use chrono::NaiveDate;
use core::str::FromStr;
use rust_decimal::Decimal;

use stockbook_core::{DomainError, ProductId, ServiceError, StoreError, SupplierId};
use stockbook_ledger::{MovementKind, StockLedger};
use stockbook_products::Product;
use stockbook_purchasing::{CreateOrder, NewOrderLine, OrderService, OrderStatus};
use stockbook_suppliers::{Supplier, SupplierDetails, SupplierDirectory};

use crate::memory::{
    InMemoryMovementStore, InMemoryOrderStore, InMemoryProductStore, InMemorySupplierStore,
};

use stockbook_ledger::MovementStore;
use stockbook_products::ProductStore;
use stockbook_purchasing::OrderStore;
use stockbook_suppliers::SupplierStore;

type Ledger = StockLedger<InMemoryProductStore, InMemoryMovementStore>;
type Orders =
    OrderService<InMemoryOrderStore, InMemorySupplierStore, InMemoryProductStore, InMemoryMovementStore>;

struct World {
    products: Arc<InMemoryProductStore>,
    suppliers: Arc<InMemorySupplierStore>,
    movements: Arc<InMemoryMovementStore>,
    order_store: Arc<InMemoryOrderStore>,
    ledger: Arc<Ledger>,
    orders: Orders,
}

fn setup() -> World {
    let products = Arc::new(InMemoryProductStore::new());
    let suppliers = Arc::new(InMemorySupplierStore::new());
    let movements = Arc::new(InMemoryMovementStore::new());
    let order_store = Arc::new(InMemoryOrderStore::new());
    let ledger = Arc::new(StockLedger::new(products.clone(), movements.clone()));
    let orders = OrderService::new(
        order_store.clone(),
        suppliers.clone(),
        products.clone(),
        ledger.clone(),
    );
    World {
        products,
        suppliers,
        movements,
        order_store,
        ledger,
        orders,
    }
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn seed_product(world: &World, name: &str, list_price: &str, initial_stock: i64) -> ProductId {
    let product = Product::new(
        ProductId::new(),
        name,
        None,
        None,
        dec(list_price),
        initial_stock,
    )
    .unwrap();
    let id = product.id_typed();
    world.products.insert(product).unwrap();
    id
}

fn seed_supplier(world: &World, company: &str) -> SupplierId {
    let supplier = Supplier::new(
        SupplierId::new(),
        SupplierDetails {
            company: company.to_string(),
            ..Default::default()
        },
    )
    .unwrap();
    let id = supplier.id_typed();
    world.suppliers.insert(supplier).unwrap();
    id
}

fn order_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn one_line_order(world: &World, supplier: SupplierId, product: ProductId) -> CreateOrder {
    CreateOrder {
        supplier_id: supplier,
        order_date: order_date(),
        lines: vec![NewOrderLine {
            product_id: product,
            quantity: 100,
            unit_price: dec("50.00"),
        }],
    }
}

// ------------------------
// Ledger
// ------------------------

#[test]
fn entries_drive_the_weighted_average_cost() {
    let world = setup();
    let product = seed_product(&world, "Widget", "60.00", 0);

    world
        .ledger
        .record_entry(product, 100, dec("50.00"), None, None)
        .unwrap();
    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 100);
    assert_eq!(p.avg_unit_cost(), dec("50.00"));

    // (100 × 50.00 + 50 × 51.00) / 150 = 50.333… → 50.33.
    world
        .ledger
        .record_entry(product, 50, dec("51.00"), None, None)
        .unwrap();
    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 150);
    assert_eq!(p.avg_unit_cost(), dec("50.33"));
}

#[test]
fn exit_uses_current_cost_and_never_changes_it() {
    let world = setup();
    let product = seed_product(&world, "Widget", "60.00", 0);
    world
        .ledger
        .record_entry(product, 100, dec("50.00"), None, None)
        .unwrap();

    let movement_id = world
        .ledger
        .record_exit(product, 40, Some("INV-7".to_string()), None)
        .unwrap();

    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 60);
    assert_eq!(p.avg_unit_cost(), dec("50.00"));

    let movement = world.ledger.movement(movement_id).unwrap();
    assert_eq!(movement.kind, MovementKind::Exit);
    assert_eq!(movement.quantity, 40);
    assert_eq!(movement.unit_cost, dec("50.00"));
    assert_eq!(movement.reference.as_deref(), Some("INV-7"));
}

#[test]
fn insufficient_stock_reports_context_and_writes_nothing() {
    let world = setup();
    let product = seed_product(&world, "Widget", "60.00", 0);
    world
        .ledger
        .record_entry(product, 10, dec("50.00"), None, None)
        .unwrap();

    let err = world
        .ledger
        .record_exit(product, 30, None, None)
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Domain(DomainError::insufficient_stock("Widget", 10, 30))
    );
    let rendered = err.to_string();
    assert!(rendered.contains("Widget"));
    assert!(rendered.contains("10"));
    assert!(rendered.contains("30"));

    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 10);
    assert_eq!(world.movements.list_for_product(product).unwrap().len(), 1);
}

#[test]
fn adjustments_move_stock_but_never_valuation() {
    let world = setup();
    let product = seed_product(&world, "Widget", "60.00", 0);
    world
        .ledger
        .record_entry(product, 10, dec("50.00"), None, None)
        .unwrap();

    world
        .ledger
        .record_adjustment(product, -10, Some("COUNT-1".to_string()), None)
        .unwrap();
    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 0);
    assert_eq!(p.avg_unit_cost(), dec("50.00"));

    let err = world
        .ledger
        .record_adjustment(product, -1, None, None)
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidAdjustment { .. })
    ));
    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 0);

    // Positive corrections also leave the cost basis alone.
    world.ledger.record_adjustment(product, 5, None, None).unwrap();
    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 5);
    assert_eq!(p.avg_unit_cost(), dec("50.00"));
}

#[test]
fn ledger_operations_on_missing_products_are_not_found() {
    let world = setup();
    let ghost = ProductId::new();
    for err in [
        world
            .ledger
            .record_entry(ghost, 1, dec("1.00"), None, None)
            .unwrap_err(),
        world.ledger.record_exit(ghost, 1, None, None).unwrap_err(),
        world.ledger.record_adjustment(ghost, 1, None, None).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::NotFound { entity: "product", .. })
        ));
    }
    assert!(world.movements.list().unwrap().is_empty());
}

#[test]
fn repeated_reads_between_mutations_are_identical() {
    let world = setup();
    let product = seed_product(&world, "Widget", "60.00", 0);
    world
        .ledger
        .record_entry(product, 7, dec("3.33"), None, None)
        .unwrap();

    let first = world.products.get(product).unwrap().unwrap();
    let second = world.products.get(product).unwrap().unwrap();
    assert_eq!(first, second);
}

// ------------------------
// Order lifecycle
// ------------------------

#[test]
fn full_lifecycle_moves_stock_in_and_out() {
    let world = setup();
    let supplier = seed_supplier(&world, "Acme Supply");
    let product = seed_product(&world, "Widget", "60.00", 0);

    // Create: PENDING, total fixed, stock received logically at creation.
    let order = world
        .orders
        .create(one_line_order(&world, supplier, product))
        .unwrap();
    let order_id = order.id_typed();
    assert_eq!(order.status(), OrderStatus::Pending);
    assert_eq!(order.total_amount(), dec("5000.00"));

    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 100);
    assert_eq!(p.avg_unit_cost(), dec("50.00"));

    let entries = world.ledger.movements_for_order(order_id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, MovementKind::Entry);
    assert_eq!(entries[0].reference.as_deref(), Some(format!("ORD-{order_id}").as_str()));

    // Validate: status only.
    let order = world.orders.validate(order_id).unwrap();
    assert_eq!(order.status(), OrderStatus::Validated);
    assert_eq!(world.products.get(product).unwrap().unwrap().on_hand(), 100);

    // Deliver: one EXIT per line at the current average cost.
    let order = world.orders.deliver(order_id).unwrap();
    assert_eq!(order.status(), OrderStatus::Delivered);

    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 0);
    assert_eq!(p.avg_unit_cost(), dec("50.00"));

    let movements = world.ledger.movements_for_order(order_id).unwrap();
    assert_eq!(movements.len(), 2);
    let exit = movements.iter().find(|m| m.kind == MovementKind::Exit).unwrap();
    assert_eq!(exit.quantity, 100);
    assert_eq!(exit.unit_cost, dec("50.00"));
}

#[test]
fn transitions_from_wrong_states_are_rejected() {
    let world = setup();
    let supplier = seed_supplier(&world, "Acme Supply");
    let product = seed_product(&world, "Widget", "60.00", 0);
    let order = world
        .orders
        .create(one_line_order(&world, supplier, product))
        .unwrap();
    let order_id = order.id_typed();

    // Deliver straight from PENDING.
    let err = world.orders.deliver(order_id).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Domain(DomainError::invalid_transition("deliver", OrderStatus::Pending))
    );

    world.orders.validate(order_id).unwrap();
    world.orders.deliver(order_id).unwrap();

    // Cancel after delivery.
    let err = world.orders.cancel(order_id).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Domain(DomainError::invalid_transition("cancel", OrderStatus::Delivered))
    );

    // Validate twice.
    let err = world.orders.validate(order_id).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidStateTransition { .. })
    ));
}

#[test]
fn cancellation_keeps_the_phantom_stock() {
    // Known limitation: cancelling never reverses the ENTRY movements
    // recorded at creation.
    let world = setup();
    let supplier = seed_supplier(&world, "Acme Supply");
    let product = seed_product(&world, "Widget", "60.00", 0);
    let order = world
        .orders
        .create(one_line_order(&world, supplier, product))
        .unwrap();

    let order = world.orders.cancel(order.id_typed()).unwrap();
    assert_eq!(order.status(), OrderStatus::Cancelled);

    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 100);
    assert_eq!(p.avg_unit_cost(), dec("50.00"));
    assert_eq!(world.movements.list_for_product(product).unwrap().len(), 1);
}

#[test]
fn deletion_is_blocked_for_delivered_orders_only() {
    let world = setup();
    let supplier = seed_supplier(&world, "Acme Supply");
    let product = seed_product(&world, "Widget", "60.00", 0);

    let pending = world
        .orders
        .create(one_line_order(&world, supplier, product))
        .unwrap();
    world.orders.delete(pending.id_typed()).unwrap();
    assert!(world.order_store.get(pending.id_typed()).unwrap().is_none());
    // The movement log and the received stock survive the deletion.
    assert_eq!(world.movements.list().unwrap().len(), 1);
    assert_eq!(world.products.get(product).unwrap().unwrap().on_hand(), 100);

    let delivered = world
        .orders
        .create(one_line_order(&world, supplier, product))
        .unwrap();
    world.orders.validate(delivered.id_typed()).unwrap();
    world.orders.deliver(delivered.id_typed()).unwrap();
    let err = world.orders.delete(delivered.id_typed()).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Domain(DomainError::invalid_transition("delete", OrderStatus::Delivered))
    );
    assert!(world.order_store.get(delivered.id_typed()).unwrap().is_some());
}

#[test]
fn failed_creation_leaves_no_partial_state() {
    let world = setup();
    let supplier = seed_supplier(&world, "Acme Supply");
    let product = seed_product(&world, "Widget", "60.00", 0);

    // Unknown supplier.
    let err = world
        .orders
        .create(one_line_order(&world, SupplierId::new(), product))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::NotFound { entity: "supplier", .. })
    ));

    // Unknown product on the second line: the guard runs before anything is
    // persisted, so the first (valid) line must not have produced an entry.
    let err = world
        .orders
        .create(CreateOrder {
            supplier_id: supplier,
            order_date: order_date(),
            lines: vec![
                NewOrderLine {
                    product_id: product,
                    quantity: 5,
                    unit_price: dec("10.00"),
                },
                NewOrderLine {
                    product_id: ProductId::new(),
                    quantity: 5,
                    unit_price: dec("10.00"),
                },
            ],
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::NotFound { entity: "product", .. })
    ));

    // Invalid line data.
    let err = world
        .orders
        .create(CreateOrder {
            supplier_id: supplier,
            order_date: order_date(),
            lines: vec![NewOrderLine {
                product_id: product,
                quantity: 0,
                unit_price: dec("10.00"),
            }],
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::Validation(_))));

    // Empty line list.
    let err = world
        .orders
        .create(CreateOrder {
            supplier_id: supplier,
            order_date: order_date(),
            lines: vec![],
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::Validation(_))));

    assert!(world.order_store.list().unwrap().is_empty());
    assert!(world.movements.list().unwrap().is_empty());
    assert_eq!(world.products.get(product).unwrap().unwrap().on_hand(), 0);
}

/// Product store whose `get` starts answering `None` after a fixed number of
/// reads, standing in for a product deleted by another caller mid-operation.
struct VanishingProductStore {
    inner: InMemoryProductStore,
    reads_left: std::sync::atomic::AtomicI64,
}

impl VanishingProductStore {
    fn new(reads_left: i64) -> Self {
        Self {
            inner: InMemoryProductStore::new(),
            reads_left: std::sync::atomic::AtomicI64::new(reads_left),
        }
    }
}

impl stockbook_products::ProductStore for VanishingProductStore {
    fn insert(&self, product: Product) -> Result<(), StoreError> {
        self.inner.insert(product)
    }

    fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        if self
            .reads_left
            .fetch_sub(1, std::sync::atomic::Ordering::SeqCst)
            <= 0
        {
            return Ok(None);
        }
        self.inner.get(id)
    }

    fn save(&self, product: Product) -> Result<(), StoreError> {
        self.inner.save(product)
    }

    fn remove(&self, id: ProductId) -> Result<bool, StoreError> {
        self.inner.remove(id)
    }

    fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.inner.list()
    }
}

#[test]
fn creation_is_all_or_nothing_when_a_product_vanishes_mid_flight() {
    // The existence guard sees the product (first read); the ledger's
    // re-check under the product lock does not (second read), as if another
    // caller deleted it in between.
    let products = Arc::new(VanishingProductStore::new(1));
    let suppliers = Arc::new(InMemorySupplierStore::new());
    let movements = Arc::new(InMemoryMovementStore::new());
    let order_store = Arc::new(InMemoryOrderStore::new());
    let ledger = Arc::new(StockLedger::new(products.clone(), movements.clone()));
    let orders = OrderService::new(
        order_store.clone(),
        suppliers.clone(),
        products.clone(),
        ledger,
    );

    let supplier = Supplier::new(
        SupplierId::new(),
        SupplierDetails {
            company: "Acme Supply".to_string(),
            ..Default::default()
        },
    )
    .unwrap();
    let supplier_id = supplier.id_typed();
    suppliers.insert(supplier).unwrap();

    let product =
        Product::new(ProductId::new(), "Widget", None, None, dec("60.00"), 0).unwrap();
    let product_id = product.id_typed();
    products.insert(product).unwrap();

    let err = orders
        .create(CreateOrder {
            supplier_id,
            order_date: order_date(),
            lines: vec![NewOrderLine {
                product_id,
                quantity: 100,
                unit_price: dec("50.00"),
            }],
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::NotFound { entity: "product", .. })
    ));

    // Nothing persisted: no order, no movement, product untouched.
    assert!(order_store.list().unwrap().is_empty());
    assert!(movements.list().unwrap().is_empty());
    let untouched = products.inner.get(product_id).unwrap().unwrap();
    assert_eq!(untouched.on_hand(), 0);
}

#[test]
fn short_stock_fails_the_whole_delivery() {
    let world = setup();
    let supplier = seed_supplier(&world, "Acme Supply");
    let product = seed_product(&world, "Widget", "60.00", 0);

    let order = world
        .orders
        .create(one_line_order(&world, supplier, product))
        .unwrap();
    world.orders.validate(order.id_typed()).unwrap();

    // A manual correction eats half of the received stock before delivery.
    world
        .ledger
        .record_exit(product, 60, Some("SHRINK".to_string()), None)
        .unwrap();

    let err = world.orders.deliver(order.id_typed()).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Domain(DomainError::insufficient_stock("Widget", 40, 100))
    );

    // Order still VALIDATED, stock untouched, no delivery exits written.
    let order = world.orders.get(order.id_typed()).unwrap();
    assert_eq!(order.status(), OrderStatus::Validated);
    assert_eq!(world.products.get(product).unwrap().unwrap().on_hand(), 40);
    let exits = world.movements.list_by_kind(MovementKind::Exit).unwrap();
    assert_eq!(exits.len(), 1); // only the manual one
}

#[test]
fn multi_line_delivery_is_all_or_nothing_per_product_totals() {
    let world = setup();
    let supplier = seed_supplier(&world, "Acme Supply");
    let product = seed_product(&world, "Widget", "60.00", 0);

    // Two lines for the same product: delivery must cover their sum.
    let order = world
        .orders
        .create(CreateOrder {
            supplier_id: supplier,
            order_date: order_date(),
            lines: vec![
                NewOrderLine {
                    product_id: product,
                    quantity: 30,
                    unit_price: dec("10.00"),
                },
                NewOrderLine {
                    product_id: product,
                    quantity: 30,
                    unit_price: dec("10.00"),
                },
            ],
        })
        .unwrap();
    world.orders.validate(order.id_typed()).unwrap();

    // Drop available stock below the 60 the two lines need together.
    world.ledger.record_adjustment(product, -10, None, None).unwrap();
    let err = world.orders.deliver(order.id_typed()).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InsufficientStock { .. })
    ));
    assert_eq!(world.products.get(product).unwrap().unwrap().on_hand(), 50);

    // Top the stock back up; now both exits go through.
    world.ledger.record_adjustment(product, 10, None, None).unwrap();
    world.orders.deliver(order.id_typed()).unwrap();
    assert_eq!(world.products.get(product).unwrap().unwrap().on_hand(), 0);
    assert_eq!(
        world
            .ledger
            .movements_for_order(order.id_typed())
            .unwrap()
            .iter()
            .filter(|m| m.kind == MovementKind::Exit)
            .count(),
        2
    );
}

// ------------------------
// Concurrency
// ------------------------

#[test]
fn concurrent_entries_and_exits_on_one_product_never_lose_updates() {
    let world = setup();
    let product = seed_product(&world, "Widget", "60.00", 0);
    world
        .ledger
        .record_entry(product, 400, dec("2.00"), None, None)
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let ledger = world.ledger.clone();
            std::thread::spawn(move || {
                for _ in 0..25 {
                    if worker % 2 == 0 {
                        ledger
                            .record_entry(product, 1, dec("2.00"), None, None)
                            .unwrap();
                    } else {
                        ledger.record_exit(product, 1, None, None).unwrap();
                    }
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    // 4 workers × 25 entries in, 4 workers × 25 exits out.
    let p = world.products.get(product).unwrap().unwrap();
    assert_eq!(p.on_hand(), 400);
    assert_eq!(p.avg_unit_cost(), dec("2.00"));
    assert_eq!(world.movements.list_for_product(product).unwrap().len(), 201);
}

#[test]
fn concurrent_supplier_creates_cannot_duplicate_an_email() {
    let store = Arc::new(InMemorySupplierStore::new());
    let directory = Arc::new(SupplierDirectory::new(store.clone()));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let directory = directory.clone();
            std::thread::spawn(move || {
                directory
                    .create(SupplierDetails {
                        company: format!("Acme {worker}"),
                        email: Some("sales@acme.test".to_string()),
                        ..Default::default()
                    })
                    .is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1);
    assert_eq!(store.list().unwrap().len(), 1);
}

// ------------------------
// Property tests
// ------------------------

#[derive(Debug, Clone)]
enum LedgerOp {
    Entry { quantity: i64, cost_cents: i64 },
    Exit { quantity: i64 },
    Adjust { delta: i64 },
}

fn ledger_op_strategy() -> impl proptest::strategy::Strategy<Value = LedgerOp> {
    use proptest::prelude::*;
    prop_oneof![
        (1i64..60, 1i64..10_000).prop_map(|(quantity, cost_cents)| LedgerOp::Entry {
            quantity,
            cost_cents
        }),
        (1i64..80).prop_map(|quantity| LedgerOp::Exit { quantity }),
        (-40i64..40).prop_map(|delta| LedgerOp::Adjust { delta }),
    ]
}

proptest::proptest! {
    /// For any operation sequence: quantity stays non-negative, and only
    /// ENTRY movements ever change the weighted-average cost.
    #[test]
    fn ledger_invariants_hold_for_any_sequence(ops in proptest::collection::vec(ledger_op_strategy(), 0..60)) {
        let world = setup();
        let product = seed_product(&world, "Widget", "60.00", 0);

        for op in ops {
            let before = world.products.get(product).unwrap().unwrap();
            match op {
                LedgerOp::Entry { quantity, cost_cents } => {
                    world
                        .ledger
                        .record_entry(product, quantity, Decimal::new(cost_cents, 2), None, None)
                        .unwrap();
                }
                LedgerOp::Exit { quantity } => {
                    let _ = world.ledger.record_exit(product, quantity, None, None);
                    let after = world.products.get(product).unwrap().unwrap();
                    proptest::prop_assert_eq!(before.avg_unit_cost(), after.avg_unit_cost());
                }
                LedgerOp::Adjust { delta } => {
                    let _ = world.ledger.record_adjustment(product, delta, None, None);
                    let after = world.products.get(product).unwrap().unwrap();
                    proptest::prop_assert_eq!(before.avg_unit_cost(), after.avg_unit_cost());
                }
            }
            let after = world.products.get(product).unwrap().unwrap();
            proptest::prop_assert!(after.on_hand() >= 0);
        }

        // The movement log accounts exactly for the final quantity.
        let mut expected = 0i64;
        for m in world.movements.list_for_product(product).unwrap() {
            expected += match m.kind {
                MovementKind::Entry => m.quantity,
                MovementKind::Exit => -m.quantity,
                MovementKind::Adjustment => m.quantity,
            };
        }
        let p = world.products.get(product).unwrap().unwrap();
        proptest::prop_assert_eq!(p.on_hand(), expected);
    }
}
