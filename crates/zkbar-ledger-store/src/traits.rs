//! WorldState trait: the abstract interface for key-value state.
//!
//! This trait allows the contract to be storage-agnostic. Implementations
//! include SQLite (persistent) and in-memory (for tests).

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{Result, StoreError};
use crate::locks::KeyLocks;

/// The WorldState trait: async interface for key-value state access.
///
/// All methods are async to support both sync (SQLite) and async backends.
/// For SQLite, we use `spawn_blocking` internally to avoid blocking the runtime.
///
/// # Design Notes
///
/// - **Absent vs empty**: backends return exactly what was stored. An empty
///   value comes back as `Some` of zero bytes; interpreting it is the
///   caller's concern.
/// - **Overwrite**: `put_state` on an existing key replaces its value.
/// - **Isolation**: a store that does not isolate transactions returns its
///   own [`KeyLocks`] from `key_locks`, so every caller sharing the store
///   serializes on the same registry.
#[async_trait]
pub trait WorldState: Send + Sync {
    /// Get the value stored under `key`, if any.
    async fn get_state(&self, key: &str) -> Result<Option<Bytes>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn put_state(&self, key: &str, value: &[u8]) -> Result<()>;

    /// The key locks bound to this store, if it needs them.
    fn key_locks(&self) -> Option<Arc<KeyLocks>> {
        None
    }
}

#[async_trait]
impl<S: WorldState + ?Sized> WorldState for Arc<S> {
    async fn get_state(&self, key: &str) -> Result<Option<Bytes>> {
        (**self).get_state(key).await
    }

    async fn put_state(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).put_state(key, value).await
    }

    fn key_locks(&self) -> Option<Arc<KeyLocks>> {
        (**self).key_locks()
    }
}

/// Extension trait for common state access patterns.
pub trait WorldStateExt: WorldState {
    /// Check whether `key` holds a non-empty value.
    ///
    /// An absent key and a key holding zero bytes are both reported as
    /// `false`.
    fn has_state(&self, key: &str) -> impl std::future::Future<Output = Result<bool>> + Send;

    /// Get the value under `key` as UTF-8 text.
    fn get_string_state(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;

    /// Store UTF-8 text under `key`.
    fn put_string_state(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

impl<S: WorldState + ?Sized> WorldStateExt for S {
    async fn has_state(&self, key: &str) -> Result<bool> {
        Ok(self
            .get_state(key)
            .await?
            .map_or(false, |value| !value.is_empty()))
    }

    async fn get_string_state(&self, key: &str) -> Result<Option<String>> {
        match self.get_state(key).await? {
            Some(value) => String::from_utf8(value.to_vec())
                .map(Some)
                .map_err(|e| StoreError::InvalidData(format!("state at {} is not UTF-8: {}", key, e))),
            None => Ok(None),
        }
    }

    async fn put_string_state(&self, key: &str, value: &str) -> Result<()> {
        self.put_state(key, value.as_bytes()).await
    }
}
