use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity, ProductId};

/// A catalog product with its current stock position.
///
/// `on_hand` and `avg_unit_cost` are mutated exclusively by the stock ledger
/// through [`Product::receive`], [`Product::issue`] and [`Product::adjust`];
/// the catalog service only edits the descriptive fields and the list price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: Option<String>,
    category: Option<String>,
    /// Unit list price, independent of the cost basis.
    unit_price: Decimal,
    /// On-hand quantity. Never negative.
    on_hand: i64,
    /// Weighted-average unit cost (cost basis for exits). Set on first entry.
    avg_unit_cost: Decimal,
}

impl Product {
    /// Create a product with validated catalog data.
    ///
    /// A strictly positive `initial_stock` seeds the weighted-average cost
    /// from the list price; an empty product starts at cost zero and gets its
    /// baseline from the first ENTRY movement.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: Option<String>,
        category: Option<String>,
        unit_price: Decimal,
        initial_stock: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if unit_price < Decimal::ZERO {
            return Err(DomainError::validation("unit price cannot be negative"));
        }
        if initial_stock < 0 {
            return Err(DomainError::validation("initial stock cannot be negative"));
        }

        let avg_unit_cost = if initial_stock > 0 {
            unit_price
        } else {
            Decimal::ZERO
        };

        Ok(Self {
            id,
            name,
            description,
            category,
            unit_price,
            on_hand: initial_stock,
            avg_unit_cost,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn on_hand(&self) -> i64 {
        self.on_hand
    }

    pub fn avg_unit_cost(&self) -> Decimal {
        self.avg_unit_cost
    }

    /// Edit catalog data. Stock and cost are deliberately not reachable here.
    pub fn edit(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        category: Option<String>,
        unit_price: Decimal,
    ) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if unit_price < Decimal::ZERO {
            return Err(DomainError::validation("unit price cannot be negative"));
        }
        self.name = name;
        self.description = description;
        self.category = category;
        self.unit_price = unit_price;
        Ok(())
    }

    /// Receive stock at `new_avg_cost` (computed by the ledger's valuation
    /// function before the call).
    pub fn receive(&mut self, quantity: i64, new_avg_cost: Decimal) {
        self.on_hand += quantity;
        self.avg_unit_cost = new_avg_cost;
    }

    /// Issue stock. Fails if `quantity` exceeds the on-hand quantity; the
    /// average cost is left unchanged.
    pub fn issue(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity > self.on_hand {
            return Err(DomainError::insufficient_stock(
                self.name.clone(),
                self.on_hand,
                quantity,
            ));
        }
        self.on_hand -= quantity;
        Ok(())
    }

    /// Check an issue without applying it (used for multi-line deliveries).
    pub fn can_issue(&self, quantity: i64) -> DomainResult<()> {
        if quantity > self.on_hand {
            return Err(DomainError::insufficient_stock(
                self.name.clone(),
                self.on_hand,
                quantity,
            ));
        }
        Ok(())
    }

    /// Apply a signed counting correction. Fails if the result would be
    /// negative; the average cost is unchanged regardless of sign.
    pub fn adjust(&mut self, delta: i64) -> DomainResult<()> {
        if self.on_hand + delta < 0 {
            return Err(DomainError::invalid_adjustment(
                self.name.clone(),
                self.on_hand,
                delta,
            ));
        }
        self.on_hand += delta;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
