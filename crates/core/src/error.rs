//! Domain and service error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type returned by service operations (business + infrastructure).
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Every variant carries
/// enough context to render a user-facing message (ids, current vs requested
/// values). Infrastructure concerns belong in [`StoreError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced resource does not exist.
    #[error("{entity} not found with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// A stock exit asked for more than is on hand.
    #[error("insufficient stock for product '{product}': available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// A stock adjustment would drive the on-hand quantity below zero.
    #[error("adjustment rejected for product '{product}': current stock {current}, adjustment {delta}")]
    InvalidAdjustment {
        product: String,
        current: i64,
        delta: i64,
    },

    /// An order transition was attempted from a state that does not allow it.
    #[error("cannot {transition} order in state {current}")]
    InvalidStateTransition {
        transition: &'static str,
        current: String,
    },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn insufficient_stock(product: impl Into<String>, available: i64, requested: i64) -> Self {
        Self::InsufficientStock {
            product: product.into(),
            available,
            requested,
        }
    }

    pub fn invalid_adjustment(product: impl Into<String>, current: i64, delta: i64) -> Self {
        Self::InvalidAdjustment {
            product: product.into(),
            current,
            delta,
        }
    }

    pub fn invalid_transition(transition: &'static str, current: impl ToString) -> Self {
        Self::InvalidStateTransition {
            transition,
            current: current.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Infrastructure-level store failure.
///
/// These are not business-rule violations and are never retried by the core;
/// they propagate unchanged to the caller, which owns retry policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Error returned by service operations: either a deterministic business
/// failure or an infrastructure failure, never a generic untyped fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// The business error, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            ServiceError::Domain(e) => Some(e),
            ServiceError::Store(_) => None,
        }
    }
}
