//! Transaction context: the per-call handle every contract operation takes.
//!
//! A context binds one invocation to a store and, optionally, to the key
//! locks that make create's check-then-write atomic on stores without
//! isolation. There is no ambient state: callers pass a context explicitly.

use std::fmt;
use std::sync::Arc;

use zkbar_ledger_store::{KeyGuard, KeyLocks, StoreError, WorldState};

/// A random 16-byte transaction identifier, shown as hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxId([u8; 16]);

impl TxId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(rand::random())
    }

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({})", self.to_hex())
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The context of a single contract invocation.
pub struct TxContext<S: WorldState> {
    tx_id: TxId,
    store: Arc<S>,
    locks: Option<Arc<KeyLocks>>,
}

impl<S: WorldState> TxContext<S> {
    /// A context with no key locks. Suitable when the store itself
    /// isolates transactions, or when there is a single caller.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            tx_id: TxId::generate(),
            store,
            locks: None,
        }
    }

    /// A context using the key locks bound to `store`, if it has any.
    pub fn from_store(store: Arc<S>) -> Self {
        let locks = store.key_locks();
        Self {
            tx_id: TxId::generate(),
            store,
            locks,
        }
    }

    /// A context whose creates are serialized per key through `locks`.
    pub fn with_locks(store: Arc<S>, locks: Arc<KeyLocks>) -> Self {
        Self {
            tx_id: TxId::generate(),
            store,
            locks: Some(locks),
        }
    }

    pub fn tx_id(&self) -> TxId {
        self.tx_id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take the key lock for `key`, if this context carries locks.
    pub async fn lock_key(&self, key: &str) -> Result<Option<KeyGuard>, StoreError> {
        match &self.locks {
            Some(locks) => Ok(Some(locks.lock(key).await?)),
            None => Ok(None),
        }
    }
}

impl<S: WorldState> fmt::Debug for TxContext<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxContext")
            .field("tx_id", &self.tx_id)
            .field("locked", &self.locks.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkbar_ledger_store::MemoryStore;

    #[test]
    fn test_tx_id_hex() {
        let id = TxId::from_bytes([0xab; 16]);
        assert_eq!(id.to_string(), "ab".repeat(16));
        assert!(format!("{:?}", id).starts_with("TxId("));
    }

    #[test]
    fn test_each_context_gets_fresh_id() {
        let store = Arc::new(MemoryStore::new());
        let a = TxContext::new(store.clone());
        let b = TxContext::new(store);
        assert_ne!(a.tx_id(), b.tx_id());
    }

    #[tokio::test]
    async fn test_lock_key_only_with_locks() {
        let store = Arc::new(MemoryStore::new());

        let plain = TxContext::new(store.clone());
        assert!(plain.lock_key("k").await.unwrap().is_none());

        let locked = TxContext::with_locks(store, Arc::new(KeyLocks::new()));
        let guard = locked.lock_key("k").await.unwrap().unwrap();
        assert_eq!(guard.key(), "k");
    }

    #[tokio::test]
    async fn test_from_store_uses_store_locks() {
        let store = Arc::new(MemoryStore::new());
        let a = TxContext::from_store(store.clone());
        let b = TxContext::from_store(store.clone());

        let _guard = a.lock_key("STUDENT_001").await.unwrap().unwrap();
        let waited = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            b.lock_key("STUDENT_001"),
        )
        .await;
        assert!(waited.is_err());
        assert_eq!(store.key_locks().unwrap().tracked().unwrap(), 1);
    }
}
