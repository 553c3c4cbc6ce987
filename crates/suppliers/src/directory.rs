//! Supplier directory CRUD service.

use std::sync::Arc;

use tracing::info;

use stockbook_core::{acquire, DomainError, KeyLock, ServiceResult, SupplierId};

use crate::store::SupplierStore;
use crate::supplier::{Supplier, SupplierDetails};

/// Creates and updates run under a directory-wide lock so the email/ICE
/// uniqueness probe and the write that follows it are one atomic step.
pub struct SupplierDirectory<S> {
    suppliers: Arc<S>,
    write_lock: KeyLock,
}

impl<S: SupplierStore> SupplierDirectory<S> {
    pub fn new(suppliers: Arc<S>) -> Self {
        Self {
            suppliers,
            write_lock: KeyLock::default(),
        }
    }

    fn check_uniqueness(
        &self,
        details: &SupplierDetails,
        except: Option<SupplierId>,
    ) -> ServiceResult<()> {
        if let Some(email) = details.email.as_deref() {
            if self.suppliers.email_taken(email, except)? {
                return Err(DomainError::validation(
                    "a supplier with this email already exists",
                )
                .into());
            }
        }
        if let Some(ice) = details.ice.as_deref() {
            if self.suppliers.ice_taken(ice, except)? {
                return Err(
                    DomainError::validation("a supplier with this ICE already exists").into(),
                );
            }
        }
        Ok(())
    }

    pub fn create(&self, details: SupplierDetails) -> ServiceResult<Supplier> {
        let _held = acquire(&self.write_lock)?;

        self.check_uniqueness(&details, None)?;
        let supplier = Supplier::new(SupplierId::new(), details)?;
        self.suppliers.insert(supplier.clone())?;
        info!(supplier_id = %supplier.id_typed(), company = supplier.company(), "supplier created");
        Ok(supplier)
    }

    pub fn update(&self, id: SupplierId, details: SupplierDetails) -> ServiceResult<Supplier> {
        let _held = acquire(&self.write_lock)?;

        let mut supplier = self
            .suppliers
            .get(id)?
            .ok_or_else(|| DomainError::not_found("supplier", id))?;
        self.check_uniqueness(&details, Some(id))?;
        supplier.update(details)?;
        self.suppliers.save(supplier.clone())?;
        info!(supplier_id = %id, "supplier updated");
        Ok(supplier)
    }

    pub fn get(&self, id: SupplierId) -> ServiceResult<Supplier> {
        Ok(self
            .suppliers
            .get(id)?
            .ok_or_else(|| DomainError::not_found("supplier", id))?)
    }

    pub fn list(&self) -> ServiceResult<Vec<Supplier>> {
        Ok(self.suppliers.list()?)
    }

    pub fn delete(&self, id: SupplierId) -> ServiceResult<()> {
        if !self.suppliers.remove(id)? {
            return Err(DomainError::not_found("supplier", id).into());
        }
        info!(supplier_id = %id, "supplier deleted");
        Ok(())
    }
}
