//! In-memory implementation of the WorldState trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{Result, StoreError};
use crate::locks::KeyLocks;
use crate::traits::WorldState;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
/// Individual reads and writes are atomic; check-then-write sequences go
/// through the store's [`KeyLocks`].
pub struct MemoryStore {
    inner: RwLock<HashMap<String, Bytes>>,
    locks: Arc<KeyLocks>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            locks: Arc::new(KeyLocks::new()),
        }
    }

    /// Number of keys holding a value (including empty values).
    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .inner
            .read()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorldState for MemoryStore {
    async fn get_state(&self, key: &str) -> Result<Option<Bytes>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        inner.insert(key.to_string(), Bytes::copy_from_slice(value));
        Ok(())
    }

    fn key_locks(&self) -> Option<Arc<KeyLocks>> {
        Some(Arc::clone(&self.locks))
    }
}
