//! Infrastructure layer: store adapters behind the domain ports.

pub mod memory;

#[cfg(test)]
mod integration_tests;

pub use memory::{
    InMemoryMovementStore, InMemoryOrderStore, InMemoryProductStore, InMemorySupplierStore,
};
