use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockbook_core::{Entity, MovementId, OrderId, ProductId};

/// Kind of stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Entry,
    Exit,
    Adjustment,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Entry => "entry",
            MovementKind::Exit => "exit",
            MovementKind::Adjustment => "adjustment",
        }
    }
}

/// One immutable line of the stock ledger.
///
/// Movements are the audit trail of all valuation changes: they are appended
/// by the ledger and never updated or deleted. `quantity` is positive for
/// entries and exits (the kind gives the direction) and signed for
/// adjustments. `unit_cost` is the entry cost for entries and the product's
/// weighted-average cost at the time of the movement otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub occurred_at: DateTime<Utc>,
    pub kind: MovementKind,
    pub quantity: i64,
    pub unit_cost: Decimal,
    pub product_id: ProductId,
    pub order_id: Option<OrderId>,
    pub reference: Option<String>,
    pub comment: Option<String>,
}

impl Entity for StockMovement {
    type Id = MovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
