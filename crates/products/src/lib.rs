//! Products domain module.
//!
//! The `Product` entity carries the two ledger-owned fields (on-hand quantity
//! and weighted-average unit cost) next to catalog data (name, description,
//! category, list price). Only the stock ledger writes quantity/cost; the
//! catalog service writes the rest.

pub mod catalog;
pub mod product;
pub mod store;

pub use catalog::{NewProduct, ProductCatalog, ProductEdit};
pub use product::Product;
pub use store::ProductStore;
