//! Order lifecycle service.
//!
//! Coordinates purchase-order state transitions with the stock ledger. The
//! coupling is deliberate and visible in the contract: creating an order
//! records one ENTRY movement per line (stock is received logically at
//! creation time), and delivering it records one EXIT movement per line.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use stockbook_core::{acquire, DomainError, LockMap, OrderId, ServiceResult, SupplierId};
use stockbook_ledger::{MovementStore, StockLedger};
use stockbook_products::ProductStore;
use stockbook_suppliers::SupplierStore;

use crate::order::{NewOrderLine, OrderLine, PurchaseOrder};
use crate::store::OrderStore;

/// Input for creating a purchase order.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub supplier_id: SupplierId,
    pub order_date: NaiveDate,
    pub lines: Vec<NewOrderLine>,
}

pub struct OrderService<O, S, P, M> {
    orders: Arc<O>,
    suppliers: Arc<S>,
    products: Arc<P>,
    ledger: Arc<StockLedger<P, M>>,
    order_locks: LockMap<OrderId>,
}

impl<O, S, P, M> OrderService<O, S, P, M>
where
    O: OrderStore,
    S: SupplierStore,
    P: ProductStore,
    M: MovementStore,
{
    pub fn new(
        orders: Arc<O>,
        suppliers: Arc<S>,
        products: Arc<P>,
        ledger: Arc<StockLedger<P, M>>,
    ) -> Self {
        Self {
            orders,
            suppliers,
            products,
            ledger,
            order_locks: LockMap::new(),
        }
    }

    fn load_order(&self, id: OrderId) -> ServiceResult<PurchaseOrder> {
        Ok(self
            .orders
            .get(id)?
            .ok_or_else(|| DomainError::not_found("order", id))?)
    }

    /// Create an order in `PENDING` and record one ENTRY movement per line.
    ///
    /// Guards run before anything is persisted: the supplier must exist,
    /// every line's product must exist, and every line must carry a quantity
    /// of at least 1 and a positive price. The ENTRY movements are recorded
    /// all-or-nothing via [`StockLedger::record_order_entries`] (which
    /// re-checks product existence under the product locks), and the order is
    /// persisted only after they succeed — a failing line leaves no order and
    /// no movement behind. The total amount is fixed here and never
    /// recomputed.
    pub fn create(&self, request: CreateOrder) -> ServiceResult<PurchaseOrder> {
        if self.suppliers.get(request.supplier_id)?.is_none() {
            return Err(DomainError::not_found("supplier", request.supplier_id).into());
        }

        let mut lines = Vec::with_capacity(request.lines.len());
        for line in request.lines {
            if self.products.get(line.product_id)?.is_none() {
                return Err(DomainError::not_found("product", line.product_id).into());
            }
            lines.push(OrderLine::new(line)?);
        }

        let order = PurchaseOrder::new(
            OrderId::new(),
            request.supplier_id,
            request.order_date,
            lines,
        )?;
        let order_id = order.id_typed();

        let entry_lines: Vec<_> = order
            .lines()
            .iter()
            .map(|l| (l.product_id, l.quantity, l.unit_price))
            .collect();
        self.ledger.record_order_entries(order_id, &entry_lines)?;
        self.orders.insert(order.clone())?;

        info!(
            order_id = %order_id,
            supplier_id = %order.supplier_id(),
            total = %order.total_amount(),
            "order created"
        );
        Ok(order)
    }

    /// `PENDING → VALIDATED`. No stock effect.
    pub fn validate(&self, id: OrderId) -> ServiceResult<PurchaseOrder> {
        let lock = self.order_locks.lock_for(&id)?;
        let _held = acquire(&lock)?;

        let mut order = self.load_order(id)?;
        order.validate()?;
        self.orders.save(order.clone())?;
        info!(order_id = %id, "order validated");
        Ok(order)
    }

    /// `VALIDATED → DELIVERED`, recording one EXIT movement per line.
    ///
    /// The exits are recorded all-or-nothing before the status is persisted:
    /// if any line lacks stock, the order stays `VALIDATED` and no movement
    /// is written. A store failure after the exits are recorded can leave
    /// the order `VALIDATED` with its delivery exits already in the log;
    /// see the `StockLedger` docs for when that can happen.
    pub fn deliver(&self, id: OrderId) -> ServiceResult<PurchaseOrder> {
        let lock = self.order_locks.lock_for(&id)?;
        let _held = acquire(&lock)?;

        let mut order = self.load_order(id)?;
        order.deliver()?;

        let lines: Vec<_> = order
            .lines()
            .iter()
            .map(|l| (l.product_id, l.quantity))
            .collect();
        self.ledger.record_order_exits(id, &lines)?;

        self.orders.save(order.clone())?;
        info!(order_id = %id, lines = lines.len(), "order delivered");
        Ok(order)
    }

    /// `PENDING | VALIDATED → CANCELLED`.
    ///
    /// Known limitation: the ENTRY
    /// movements recorded at creation are NOT reversed, so a cancelled order
    /// leaves its received quantities in stock and its entry prices in the
    /// weighted-average cost. Correct with a manual adjustment if needed.
    pub fn cancel(&self, id: OrderId) -> ServiceResult<PurchaseOrder> {
        let lock = self.order_locks.lock_for(&id)?;
        let _held = acquire(&lock)?;

        let mut order = self.load_order(id)?;
        order.cancel()?;
        self.orders.save(order.clone())?;
        warn!(order_id = %id, "order cancelled; entry movements are not reversed");
        Ok(order)
    }

    /// Change the order date. Lines and stock effects are not recomputed.
    pub fn reschedule(&self, id: OrderId, order_date: NaiveDate) -> ServiceResult<PurchaseOrder> {
        let lock = self.order_locks.lock_for(&id)?;
        let _held = acquire(&lock)?;

        let mut order = self.load_order(id)?;
        order.reschedule(order_date)?;
        self.orders.save(order.clone())?;
        info!(order_id = %id, %order_date, "order rescheduled");
        Ok(order)
    }

    /// Remove a non-delivered order and its lines.
    ///
    /// Same limitation as [`OrderService::cancel`]: prior ENTRY movements are
    /// kept, both as audit trail and as (phantom) stock.
    pub fn delete(&self, id: OrderId) -> ServiceResult<()> {
        let lock = self.order_locks.lock_for(&id)?;
        let _held = acquire(&lock)?;

        let order = self.load_order(id)?;
        order.ensure_deletable()?;
        self.orders.remove(id)?;
        info!(order_id = %id, "order deleted");
        Ok(())
    }

    pub fn get(&self, id: OrderId) -> ServiceResult<PurchaseOrder> {
        self.load_order(id)
    }

    pub fn list(&self) -> ServiceResult<Vec<PurchaseOrder>> {
        Ok(self.orders.list()?)
    }
}
