//! The stock ledger service.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use stockbook_core::{
    acquire, DomainError, LockMap, MovementId, OrderId, ProductId, ServiceResult,
};
use stockbook_products::{Product, ProductStore};

use crate::movement::{MovementKind, StockMovement};
use crate::store::MovementStore;
use crate::valuation::weighted_average_cost;

/// Records stock movements and maintains each product's on-hand quantity and
/// weighted-average unit cost.
///
/// Every operation is a read-validate-append-write sequence executed under
/// the product's lock, so concurrent operations on the same product are
/// serialized while different products proceed in parallel. A rejected
/// operation performs no writes.
///
/// The movement is appended before the product write. A store failure
/// between the two strands a movement without its product update; with the
/// in-memory stores this can only happen on lock poisoning, after which the
/// store reports `Unavailable` for every subsequent call anyway.
pub struct StockLedger<P, M> {
    products: Arc<P>,
    movements: Arc<M>,
    product_locks: LockMap<ProductId>,
}

impl<P: ProductStore, M: MovementStore> StockLedger<P, M> {
    pub fn new(products: Arc<P>, movements: Arc<M>) -> Self {
        Self {
            products,
            movements,
            product_locks: LockMap::new(),
        }
    }

    fn load_product(&self, id: ProductId) -> ServiceResult<Product> {
        Ok(self
            .products
            .get(id)?
            .ok_or_else(|| DomainError::not_found("product", id))?)
    }

    /// Record an ENTRY movement: stock received at `unit_cost`.
    ///
    /// Recomputes the product's weighted-average cost and increases the
    /// on-hand quantity. `order` links the movement to the purchase order
    /// that caused it, if any.
    pub fn record_entry(
        &self,
        product_id: ProductId,
        quantity: i64,
        unit_cost: Decimal,
        order: Option<OrderId>,
        comment: Option<String>,
    ) -> ServiceResult<MovementId> {
        if quantity <= 0 {
            return Err(DomainError::validation("entry quantity must be positive").into());
        }
        if unit_cost < Decimal::ZERO {
            return Err(DomainError::validation("entry unit cost cannot be negative").into());
        }

        let lock = self.product_locks.lock_for(&product_id)?;
        let _held = acquire(&lock)?;

        let mut product = self.load_product(product_id)?;
        let new_cost = weighted_average_cost(
            product.on_hand(),
            product.avg_unit_cost(),
            quantity,
            unit_cost,
        );

        let movement = StockMovement {
            id: MovementId::new(),
            occurred_at: Utc::now(),
            kind: MovementKind::Entry,
            quantity,
            unit_cost,
            product_id,
            order_id: order,
            reference: order.map(|id| format!("ORD-{id}")),
            comment,
        };
        let movement_id = movement.id;

        self.movements.append(movement)?;
        product.receive(quantity, new_cost);
        self.products.save(product)?;

        info!(
            product_id = %product_id,
            quantity,
            new_avg_cost = %new_cost,
            "stock entry recorded"
        );
        Ok(movement_id)
    }

    /// Record an EXIT movement: stock issued at the product's *current*
    /// weighted-average cost (captured before the decrement).
    ///
    /// Fails with `InsufficientStock` if `quantity` exceeds the on-hand
    /// quantity. The weighted-average cost is left unchanged.
    pub fn record_exit(
        &self,
        product_id: ProductId,
        quantity: i64,
        reference: Option<String>,
        comment: Option<String>,
    ) -> ServiceResult<MovementId> {
        if quantity <= 0 {
            return Err(DomainError::validation("exit quantity must be positive").into());
        }

        let lock = self.product_locks.lock_for(&product_id)?;
        let _held = acquire(&lock)?;

        let mut product = self.load_product(product_id)?;
        let movement = StockMovement {
            id: MovementId::new(),
            occurred_at: Utc::now(),
            kind: MovementKind::Exit,
            quantity,
            unit_cost: product.avg_unit_cost(),
            product_id,
            order_id: None,
            reference,
            comment,
        };
        let movement_id = movement.id;

        product.issue(quantity)?;
        self.movements.append(movement)?;
        self.products.save(product)?;

        info!(product_id = %product_id, quantity, "stock exit recorded");
        Ok(movement_id)
    }

    /// Record an ADJUSTMENT movement: a signed counting correction at the
    /// current weighted-average cost.
    ///
    /// Fails with `InvalidAdjustment` if the correction would drive the
    /// on-hand quantity below zero. The cost is unchanged regardless of sign:
    /// adjustments correct counting errors, not valuation.
    pub fn record_adjustment(
        &self,
        product_id: ProductId,
        delta: i64,
        reference: Option<String>,
        comment: Option<String>,
    ) -> ServiceResult<MovementId> {
        if delta == 0 {
            return Err(DomainError::validation("adjustment delta cannot be zero").into());
        }

        let lock = self.product_locks.lock_for(&product_id)?;
        let _held = acquire(&lock)?;

        let mut product = self.load_product(product_id)?;
        let movement = StockMovement {
            id: MovementId::new(),
            occurred_at: Utc::now(),
            kind: MovementKind::Adjustment,
            quantity: delta,
            unit_cost: product.avg_unit_cost(),
            product_id,
            order_id: None,
            reference,
            comment,
        };
        let movement_id = movement.id;

        product.adjust(delta)?;
        self.movements.append(movement)?;
        self.products.save(product)?;

        info!(product_id = %product_id, delta, "stock adjustment recorded");
        Ok(movement_id)
    }

    /// Record the ENTRY movements for a newly created order, all-or-nothing.
    ///
    /// Mirror of [`StockLedger::record_order_exits`]: all involved product
    /// locks are taken in sorted id order and every product is checked to
    /// exist before any movement is written, so an order whose product
    /// vanished since the caller's guard produces no movements at all.
    pub fn record_order_entries(
        &self,
        order_id: OrderId,
        lines: &[(ProductId, i64, Decimal)],
    ) -> ServiceResult<Vec<MovementId>> {
        if lines.is_empty() {
            return Err(DomainError::validation("order has no lines to receive").into());
        }
        for &(_, quantity, unit_cost) in lines {
            if quantity <= 0 {
                return Err(DomainError::validation("entry quantity must be positive").into());
            }
            if unit_cost < Decimal::ZERO {
                return Err(DomainError::validation("entry unit cost cannot be negative").into());
            }
        }

        let mut lock_ids: Vec<ProductId> = lines.iter().map(|(id, _, _)| *id).collect();
        lock_ids.sort();
        lock_ids.dedup();
        let locks = self.product_locks.locks_for(&lock_ids)?;
        let mut held = Vec::with_capacity(locks.len());
        for lock in &locks {
            held.push(acquire(lock)?);
        }

        for &product_id in &lock_ids {
            self.load_product(product_id)?;
        }

        let mut movement_ids = Vec::with_capacity(lines.len());
        for &(product_id, quantity, unit_cost) in lines {
            let mut product = self.load_product(product_id)?;
            let new_cost = weighted_average_cost(
                product.on_hand(),
                product.avg_unit_cost(),
                quantity,
                unit_cost,
            );
            let movement = StockMovement {
                id: MovementId::new(),
                occurred_at: Utc::now(),
                kind: MovementKind::Entry,
                quantity,
                unit_cost,
                product_id,
                order_id: Some(order_id),
                reference: Some(format!("ORD-{order_id}")),
                comment: Some(format!("order created #{order_id}")),
            };
            movement_ids.push(movement.id);

            self.movements.append(movement)?;
            product.receive(quantity, new_cost);
            self.products.save(product)?;
        }

        info!(order_id = %order_id, lines = lines.len(), "order entry movements recorded");
        Ok(movement_ids)
    }

    /// Record the EXIT movements for a delivered order, all-or-nothing.
    ///
    /// All involved product locks are taken in sorted id order, every line is
    /// checked against available stock, and only then is any movement
    /// written. A single short line therefore fails the whole delivery with
    /// no state change.
    pub fn record_order_exits(
        &self,
        order_id: OrderId,
        lines: &[(ProductId, i64)],
    ) -> ServiceResult<Vec<MovementId>> {
        if lines.is_empty() {
            return Err(DomainError::validation("order has no lines to deliver").into());
        }
        if let Some((_, quantity)) = lines.iter().find(|(_, q)| *q <= 0) {
            return Err(DomainError::validation(format!(
                "exit quantity must be positive, got {quantity}"
            ))
            .into());
        }

        let mut lock_ids: Vec<ProductId> = lines.iter().map(|(id, _)| *id).collect();
        lock_ids.sort();
        lock_ids.dedup();
        let locks = self.product_locks.locks_for(&lock_ids)?;
        let mut held = Vec::with_capacity(locks.len());
        for lock in &locks {
            held.push(acquire(lock)?);
        }

        // Validate every line before writing anything. A product appearing on
        // several lines must cover the sum of its line quantities.
        let mut totals: HashMap<ProductId, i64> = HashMap::new();
        for &(product_id, quantity) in lines {
            *totals.entry(product_id).or_insert(0) += quantity;
        }
        for (&product_id, &total) in &totals {
            self.load_product(product_id)?.can_issue(total)?;
        }

        let mut movement_ids = Vec::with_capacity(lines.len());
        for &(product_id, quantity) in lines {
            let mut product = self.load_product(product_id)?;
            let movement = StockMovement {
                id: MovementId::new(),
                occurred_at: Utc::now(),
                kind: MovementKind::Exit,
                quantity,
                unit_cost: product.avg_unit_cost(),
                product_id,
                order_id: Some(order_id),
                reference: Some(format!("ORD-{order_id}")),
                comment: Some(format!("delivery of order #{order_id}")),
            };
            movement_ids.push(movement.id);

            product.issue(quantity)?;
            self.movements.append(movement)?;
            self.products.save(product)?;
        }

        info!(order_id = %order_id, lines = lines.len(), "order delivery exits recorded");
        Ok(movement_ids)
    }

    // ------------------------
    // Movement queries
    // ------------------------

    pub fn movement(&self, id: MovementId) -> ServiceResult<StockMovement> {
        Ok(self
            .movements
            .get(id)?
            .ok_or_else(|| DomainError::not_found("movement", id))?)
    }

    pub fn movements(&self) -> ServiceResult<Vec<StockMovement>> {
        Ok(self.movements.list()?)
    }

    pub fn movements_for_product(&self, product_id: ProductId) -> ServiceResult<Vec<StockMovement>> {
        Ok(self.movements.list_for_product(product_id)?)
    }

    pub fn movements_for_order(&self, order_id: OrderId) -> ServiceResult<Vec<StockMovement>> {
        Ok(self.movements.list_for_order(order_id)?)
    }

    pub fn movements_by_kind(&self, kind: MovementKind) -> ServiceResult<Vec<StockMovement>> {
        Ok(self.movements.list_by_kind(kind)?)
    }
}
