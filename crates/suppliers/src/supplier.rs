use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity, SupplierId};

/// A supplier of purchase orders.
///
/// `ice` is the company registration number; email and ICE are unique across
/// the directory (enforced by `SupplierDirectory`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    company: String,
    address: Option<String>,
    contact: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    city: Option<String>,
    ice: Option<String>,
}

/// Mutable supplier fields (everything but the id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDetails {
    pub company: String,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub ice: Option<String>,
}

impl Supplier {
    pub fn new(id: SupplierId, details: SupplierDetails) -> DomainResult<Self> {
        if details.company.trim().is_empty() {
            return Err(DomainError::validation("supplier company cannot be empty"));
        }
        Ok(Self {
            id,
            company: details.company,
            address: details.address,
            contact: details.contact,
            email: details.email,
            phone: details.phone,
            city: details.city,
            ice: details.ice,
        })
    }

    pub fn id_typed(&self) -> SupplierId {
        self.id
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn ice(&self) -> Option<&str> {
        self.ice.as_deref()
    }

    pub fn details(&self) -> SupplierDetails {
        SupplierDetails {
            company: self.company.clone(),
            address: self.address.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            ice: self.ice.clone(),
        }
    }

    pub fn update(&mut self, details: SupplierDetails) -> DomainResult<()> {
        if details.company.trim().is_empty() {
            return Err(DomainError::validation("supplier company cannot be empty"));
        }
        self.company = details.company;
        self.address = details.address;
        self.contact = details.contact;
        self.email = details.email;
        self.phone = details.phone;
        self.city = details.city;
        self.ice = details.ice;
        Ok(())
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
