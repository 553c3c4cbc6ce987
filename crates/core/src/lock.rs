//! Per-key mutual exclusion.
//!
//! Stock and order operations are read-modify-write sequences over a single
//! entity; `LockMap` serializes the operations that touch the same key while
//! leaving operations on different keys free to run in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;

/// A handle to one key's lock. Hold it with [`acquire`] for the duration of
/// the read-modify-write sequence.
pub type KeyLock = Arc<Mutex<()>>;

/// Acquire a [`KeyLock`], blocking until it is free.
pub fn acquire(lock: &KeyLock) -> Result<MutexGuard<'_, ()>, StoreError> {
    lock.lock()
        .map_err(|_| StoreError::unavailable("lock poisoned"))
}

/// Lazily-created registry of per-key locks.
///
/// Locks are never removed; the key space here (products, orders) is bounded
/// by the catalog size.
#[derive(Debug, Default)]
pub struct LockMap<K> {
    inner: Mutex<HashMap<K, KeyLock>>,
}

impl<K: Eq + core::hash::Hash + Clone> LockMap<K> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch (or create) the lock for `key`.
    pub fn lock_for(&self, key: &K) -> Result<KeyLock, StoreError> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| StoreError::unavailable("lock registry poisoned"))?;
        Ok(map.entry(key.clone()).or_default().clone())
    }

    /// Fetch the locks for several keys at once.
    ///
    /// Callers that hold more than one lock must acquire them in a stable
    /// order; see `StockLedger::record_order_exits`.
    pub fn locks_for(&self, keys: &[K]) -> Result<Vec<KeyLock>, StoreError> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| StoreError::unavailable("lock registry poisoned"))?;
        Ok(keys
            .iter()
            .map(|key| map.entry(key.clone()).or_default().clone())
            .collect())
    }
}
