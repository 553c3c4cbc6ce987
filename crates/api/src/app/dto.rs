//! Request/response DTOs and JSON mapping helpers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use stockbook_core::{OrderId, ProductId, SupplierId};
use stockbook_ledger::StockMovement;
use stockbook_products::Product;
use stockbook_purchasing::PurchaseOrder;
use stockbook_suppliers::{Supplier, SupplierDetails};

// ------------------------
// Requests
// ------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub unit_price: Decimal,
    #[serde(default)]
    pub initial_stock: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub unit_price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct SupplierRequest {
    pub company: String,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub ice: Option<String>,
}

impl SupplierRequest {
    pub fn into_details(self) -> SupplierDetails {
        SupplierDetails {
            company: self.company,
            address: self.address,
            contact: self.contact,
            email: self.email,
            phone: self.phone,
            city: self.city,
            ice: self.ice,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub supplier_id: SupplierId,
    pub order_date: NaiveDate,
    pub lines: Vec<OrderLineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct RescheduleOrderRequest {
    pub order_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct StockEntryRequest {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_cost: Decimal,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StockExitRequest {
    pub product_id: ProductId,
    pub quantity: i64,
    pub reference: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StockAdjustmentRequest {
    pub product_id: ProductId,
    pub delta: i64,
    pub reference: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MovementFilter {
    pub product_id: Option<ProductId>,
    pub order_id: Option<OrderId>,
    pub kind: Option<String>,
}

// ------------------------
// Responses
// ------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    json!({
        "id": p.id_typed().to_string(),
        "name": p.name(),
        "description": p.description(),
        "category": p.category(),
        "unit_price": p.unit_price(),
        "on_hand": p.on_hand(),
        "avg_unit_cost": p.avg_unit_cost(),
    })
}

pub fn supplier_to_json(s: &Supplier) -> serde_json::Value {
    let details = s.details();
    json!({
        "id": s.id_typed().to_string(),
        "company": details.company,
        "address": details.address,
        "contact": details.contact,
        "email": details.email,
        "phone": details.phone,
        "city": details.city,
        "ice": details.ice,
    })
}

pub fn order_to_json(o: &PurchaseOrder) -> serde_json::Value {
    json!({
        "id": o.id_typed().to_string(),
        "supplier_id": o.supplier_id().to_string(),
        "order_date": o.order_date(),
        "status": o.status().to_string(),
        "total_amount": o.total_amount(),
        "lines": o.lines().iter().map(|l| json!({
            "product_id": l.product_id.to_string(),
            "quantity": l.quantity,
            "unit_price": l.unit_price,
            "subtotal": l.subtotal,
        })).collect::<Vec<_>>(),
    })
}

pub fn movement_to_json(m: &StockMovement) -> serde_json::Value {
    json!({
        "id": m.id.to_string(),
        "occurred_at": m.occurred_at,
        "kind": m.kind.as_str(),
        "quantity": m.quantity,
        "unit_cost": m.unit_cost,
        "product_id": m.product_id.to_string(),
        "order_id": m.order_id.map(|id| id.to_string()),
        "reference": m.reference.clone(),
        "comment": m.comment.clone(),
    })
}
