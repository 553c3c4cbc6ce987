use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockbook_core::{line_subtotal, DomainError, DomainResult, Entity, OrderId, ProductId, SupplierId};

/// Purchase order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Validated,
    Delivered,
    Cancelled,
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Validated => "validated",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// One product-quantity-price tuple within an order, fixed at creation.
///
/// The sub-total is quantity × unit price at ordering time; later changes to
/// the product's list price never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// Requested line content, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: Decimal,
}

impl OrderLine {
    pub fn new(line: NewOrderLine) -> DomainResult<Self> {
        if line.quantity < 1 {
            return Err(DomainError::validation("line quantity must be at least 1"));
        }
        if line.unit_price <= Decimal::ZERO {
            return Err(DomainError::validation("line unit price must be positive"));
        }
        Ok(Self {
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price: line.unit_price,
            subtotal: line_subtotal(line.quantity, line.unit_price),
        })
    }
}

/// A supplier purchase order.
///
/// The total amount is the sum of line sub-totals at creation-time prices and
/// is never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    id: OrderId,
    supplier_id: SupplierId,
    order_date: NaiveDate,
    status: OrderStatus,
    total_amount: Decimal,
    lines: Vec<OrderLine>,
}

impl PurchaseOrder {
    pub fn new(
        id: OrderId,
        supplier_id: SupplierId,
        order_date: NaiveDate,
        lines: Vec<OrderLine>,
    ) -> DomainResult<Self> {
        if lines.is_empty() {
            return Err(DomainError::validation("order must have at least one line"));
        }
        let total_amount = lines.iter().map(|l| l.subtotal).sum();
        Ok(Self {
            id,
            supplier_id,
            order_date,
            status: OrderStatus::Pending,
            total_amount,
            lines,
        })
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn supplier_id(&self) -> SupplierId {
        self.supplier_id
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// `PENDING → VALIDATED`. No stock effect.
    pub fn validate(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::Pending {
            return Err(DomainError::invalid_transition("validate", self.status));
        }
        self.status = OrderStatus::Validated;
        Ok(())
    }

    /// `VALIDATED → DELIVERED`. The caller records one EXIT per line.
    pub fn deliver(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::Validated {
            return Err(DomainError::invalid_transition("deliver", self.status));
        }
        self.status = OrderStatus::Delivered;
        Ok(())
    }

    /// `PENDING | VALIDATED → CANCELLED`. No stock reversal.
    pub fn cancel(&mut self) -> DomainResult<()> {
        match self.status {
            OrderStatus::Pending | OrderStatus::Validated => {
                self.status = OrderStatus::Cancelled;
                Ok(())
            }
            _ => Err(DomainError::invalid_transition("cancel", self.status)),
        }
    }

    /// Move the order date. Allowed while `PENDING` or `VALIDATED`; lines and
    /// stock effects are not recomputed.
    pub fn reschedule(&mut self, order_date: NaiveDate) -> DomainResult<()> {
        match self.status {
            OrderStatus::Pending | OrderStatus::Validated => {
                self.order_date = order_date;
                Ok(())
            }
            _ => Err(DomainError::invalid_transition("update", self.status)),
        }
    }

    /// Deletion guard: delivered orders are part of the stock history and
    /// cannot be removed.
    pub fn ensure_deletable(&self) -> DomainResult<()> {
        if self.status == OrderStatus::Delivered {
            return Err(DomainError::invalid_transition("delete", self.status));
        }
        Ok(())
    }
}

impl Entity for PurchaseOrder {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(quantity: i64, price: &str) -> OrderLine {
        OrderLine::new(NewOrderLine {
            product_id: ProductId::new(),
            quantity,
            unit_price: dec(price),
        })
        .unwrap()
    }

    fn order(lines: Vec<OrderLine>) -> PurchaseOrder {
        PurchaseOrder::new(
            OrderId::new(),
            SupplierId::new(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            lines,
        )
        .unwrap()
    }

    #[test]
    fn line_rejects_zero_quantity_and_free_prices() {
        assert!(OrderLine::new(NewOrderLine {
            product_id: ProductId::new(),
            quantity: 0,
            unit_price: dec("1.00"),
        })
        .is_err());
        assert!(OrderLine::new(NewOrderLine {
            product_id: ProductId::new(),
            quantity: 1,
            unit_price: Decimal::ZERO,
        })
        .is_err());
    }

    #[test]
    fn total_is_the_sum_of_line_subtotals() {
        let o = order(vec![line(100, "50.00"), line(3, "12.50")]);
        assert_eq!(o.total_amount(), dec("5037.50"));
        assert_eq!(o.status(), OrderStatus::Pending);
    }

    #[test]
    fn empty_order_is_rejected() {
        let err = PurchaseOrder::new(
            OrderId::new(),
            SupplierId::new(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn happy_path_pending_validated_delivered() {
        let mut o = order(vec![line(10, "2.00")]);
        o.validate().unwrap();
        assert_eq!(o.status(), OrderStatus::Validated);
        o.deliver().unwrap();
        assert_eq!(o.status(), OrderStatus::Delivered);
    }

    #[test]
    fn deliver_requires_validated() {
        let mut o = order(vec![line(10, "2.00")]);
        let err = o.deliver().unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_transition("deliver", OrderStatus::Pending)
        );
        assert_eq!(o.status(), OrderStatus::Pending);
    }

    #[test]
    fn cancel_is_terminal_and_only_from_pending_or_validated() {
        let mut o = order(vec![line(10, "2.00")]);
        o.cancel().unwrap();
        assert_eq!(o.status(), OrderStatus::Cancelled);

        // Re-cancelling a cancelled order is an invalid transition.
        assert!(o.cancel().is_err());
        assert!(o.validate().is_err());

        let mut delivered = order(vec![line(1, "1.00")]);
        delivered.validate().unwrap();
        delivered.deliver().unwrap();
        let err = delivered.cancel().unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_transition("cancel", OrderStatus::Delivered)
        );
    }

    #[test]
    fn reschedule_only_before_delivery() {
        let new_date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let mut o = order(vec![line(10, "2.00")]);
        o.reschedule(new_date).unwrap();
        assert_eq!(o.order_date(), new_date);

        o.validate().unwrap();
        o.deliver().unwrap();
        assert!(o.reschedule(new_date).is_err());
    }

    #[test]
    fn delivered_orders_are_not_deletable() {
        let mut o = order(vec![line(10, "2.00")]);
        o.ensure_deletable().unwrap();
        o.validate().unwrap();
        o.ensure_deletable().unwrap();
        o.deliver().unwrap();
        assert!(o.ensure_deletable().is_err());
    }

    proptest::proptest! {
        /// Whatever sequence of transition attempts is made, the status only
        /// ever follows the allowed edges.
        #[test]
        fn status_never_leaves_the_state_graph(steps in proptest::collection::vec(0u8..3, 0..12)) {
            let mut o = order(vec![line(5, "9.99")]);
            for step in steps {
                let before = o.status();
                let result = match step {
                    0 => o.validate(),
                    1 => o.deliver(),
                    _ => o.cancel(),
                };
                let after = o.status();
                match result {
                    Ok(()) => {
                        let legal = matches!(
                            (before, after),
                            (OrderStatus::Pending, OrderStatus::Validated)
                                | (OrderStatus::Validated, OrderStatus::Delivered)
                                | (OrderStatus::Pending, OrderStatus::Cancelled)
                                | (OrderStatus::Validated, OrderStatus::Cancelled)
                        );
                        proptest::prop_assert!(legal, "illegal edge {:?} -> {:?}", before, after);
                    }
                    Err(_) => proptest::prop_assert_eq!(before, after),
                }
            }
        }
    }
}
