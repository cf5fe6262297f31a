//! Per-key locks for check-then-write sequences.
//!
//! The bundled stores apply each `get_state` and `put_state` on its own.
//! Two writers that both read "absent" before either writes would both
//! succeed. Holding a [`KeyGuard`] for the key across the read and the
//! write serializes such writers while leaving unrelated keys uncontended.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::error::{Result, StoreError};

/// A registry of per-key async mutexes.
#[derive(Default)]
pub struct KeyLocks {
    inner: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

/// Exclusive hold on one key. Released on drop.
pub struct KeyGuard {
    key: String,
    _guard: OwnedMutexGuard<()>,
}

impl KeyGuard {
    /// The key this guard holds.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl KeyLocks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `key`.
    pub async fn lock(&self, key: &str) -> Result<KeyGuard> {
        let mutex = {
            let mut map = self.inner.lock().map_err(|_| StoreError::LockPoisoned)?;
            // Entries only the registry still references are idle.
            map.retain(|_, m| Arc::strong_count(m) > 1);
            map.entry(key.to_string()).or_default().clone()
        };

        Ok(KeyGuard {
            key: key.to_string(),
            _guard: mutex.lock_owned().await,
        })
    }

    /// Number of keys currently tracked (held, awaited, or not yet pruned).
    pub fn tracked(&self) -> Result<usize> {
        let map = self.inner.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.len())
    }
}
