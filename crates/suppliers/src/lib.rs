//! Suppliers domain module.

pub mod directory;
pub mod store;
pub mod supplier;

pub use directory::SupplierDirectory;
pub use store::SupplierStore;
pub use supplier::{Supplier, SupplierDetails};
