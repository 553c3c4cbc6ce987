//! Product catalog CRUD service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use stockbook_core::{DomainError, ProductId, ServiceResult};

use crate::product::Product;
use crate::store::ProductStore;

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub unit_price: Decimal,
    pub initial_stock: i64,
}

/// Input for editing a product's catalog data.
///
/// Stock and weighted-average cost are absent on purpose: those fields are
/// owned by the stock ledger.
#[derive(Debug, Clone)]
pub struct ProductEdit {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub unit_price: Decimal,
}

/// Catalog-facing product operations.
pub struct ProductCatalog<P> {
    products: Arc<P>,
}

impl<P: ProductStore> ProductCatalog<P> {
    pub fn new(products: Arc<P>) -> Self {
        Self { products }
    }

    pub fn create(&self, input: NewProduct) -> ServiceResult<Product> {
        let product = Product::new(
            ProductId::new(),
            input.name,
            input.description,
            input.category,
            input.unit_price,
            input.initial_stock,
        )?;
        self.products.insert(product.clone())?;
        info!(product_id = %product.id_typed(), name = product.name(), "product created");
        Ok(product)
    }

    pub fn update(&self, id: ProductId, edit: ProductEdit) -> ServiceResult<Product> {
        let mut product = self
            .products
            .get(id)?
            .ok_or_else(|| DomainError::not_found("product", id))?;
        product.edit(edit.name, edit.description, edit.category, edit.unit_price)?;
        self.products.save(product.clone())?;
        info!(product_id = %id, "product updated");
        Ok(product)
    }

    pub fn get(&self, id: ProductId) -> ServiceResult<Product> {
        Ok(self
            .products
            .get(id)?
            .ok_or_else(|| DomainError::not_found("product", id))?)
    }

    pub fn list(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.products.list()?)
    }

    pub fn delete(&self, id: ProductId) -> ServiceResult<()> {
        if !self.products.remove(id)? {
            return Err(DomainError::not_found("product", id).into());
        }
        info!(product_id = %id, "product deleted");
        Ok(())
    }
}
