//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use zkbar_ledger::{Ledger, LedgerConfig, TxContext};
use zkbar_ledger_core::{StudentRecord, STATUS_ISSUED};
use zkbar_ledger_store::MemoryStore;

/// A test fixture with a shared memory store.
pub struct TestFixture {
    pub store: Arc<MemoryStore>,
}

impl TestFixture {
    /// Create a new test fixture over an empty store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// A fresh context over the fixture's store, without key locks.
    pub fn context(&self) -> TxContext<MemoryStore> {
        TxContext::new(Arc::clone(&self.store))
    }

    /// A fresh context over the fixture's store, using the store's key locks.
    pub fn locked_context(&self) -> TxContext<MemoryStore> {
        TxContext::from_store(Arc::clone(&self.store))
    }

    /// A ledger over the fixture's store. Every ledger and locked context
    /// from one fixture shares the same key locks.
    pub fn ledger(&self) -> Ledger<MemoryStore> {
        Ledger::from_arc(Arc::clone(&self.store), LedgerConfig::default())
    }

    /// An issued record for `student_id` with fixed placeholder fields.
    pub fn make_record(&self, student_id: &str) -> StudentRecord {
        StudentRecord::new(
            student_id,
            format!("did:zkbar:{}", student_id.to_lowercase()),
            "B.Sc",
            3.5,
            "2024",
            "QmHash",
            "OxHash",
            STATUS_ISSUED,
        )
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
