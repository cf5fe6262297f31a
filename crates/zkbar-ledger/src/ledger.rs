//! The Ledger: unified API for the ZKBAR ledger.
//!
//! The Ledger stands in for the hosting runtime. It owns a store and the
//! key locks, opens a fresh transaction context per call, and hands it to
//! the [`TranscriptContract`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use zkbar_ledger_core::StudentRecord;
use zkbar_ledger_store::{KeyLocks, WorldState};

use crate::context::TxContext;
use crate::contract::{seed_records, TranscriptContract};
use crate::error::Result;

/// Configuration for the Ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Serialize creates on the same student id through key locks.
    pub serialize_creates: bool,
    /// Seed the sample transcripts in [`Ledger::open`] if they are absent.
    pub seed_on_open: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            serialize_creates: true,
            seed_on_open: false,
        }
    }
}

impl LedgerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// The main Ledger struct.
///
/// Provides a unified API for:
/// - Issuing transcripts
/// - Querying transcripts
/// - Checking existence
/// - Seeding sample data
pub struct Ledger<S: WorldState> {
    /// The storage backend.
    store: Arc<S>,
    /// Per-key locks: the store's own, or a private registry if the store
    /// has none.
    locks: Arc<KeyLocks>,
    /// Configuration.
    config: LedgerConfig,
    contract: TranscriptContract,
}

impl<S: WorldState> Ledger<S> {
    /// Create a new ledger over `store`.
    pub fn new(store: S, config: LedgerConfig) -> Self {
        Self::from_arc(Arc::new(store), config)
    }

    /// Create a new ledger over a shared store.
    ///
    /// Ledgers over the same store lock against each other through the
    /// store's [`KeyLocks`].
    pub fn from_arc(store: Arc<S>, config: LedgerConfig) -> Self {
        let locks = store
            .key_locks()
            .unwrap_or_else(|| Arc::new(KeyLocks::new()));
        Self {
            store,
            locks,
            config,
            contract: TranscriptContract::new(),
        }
    }

    /// Create a ledger and apply open-time configuration.
    ///
    /// With `seed_on_open`, each sample transcript that is not yet present
    /// is written, so reopening a seeded or partly seeded store works.
    pub async fn open(store: S, config: LedgerConfig) -> Result<Self> {
        let ledger = Self::new(store, config);

        if ledger.config.seed_on_open {
            let ctx = ledger.context();
            let mut seeded = 0;
            for record in seed_records() {
                if ledger
                    .contract
                    .transcript_exists(&ctx, record.student_id().as_str())
                    .await?
                {
                    continue;
                }
                ledger.contract.issue_transcript(&ctx, record).await?;
                seeded += 1;
            }
            tracing::debug!(tx_id = %ctx.tx_id(), seeded, "sample transcripts checked on open");
        }

        Ok(ledger)
    }

    /// Open a fresh transaction context.
    pub fn context(&self) -> TxContext<S> {
        if self.config.serialize_creates {
            TxContext::with_locks(Arc::clone(&self.store), Arc::clone(&self.locks))
        } else {
            TxContext::new(Arc::clone(&self.store))
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contract Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Seed the two sample transcripts. See [`TranscriptContract::init_ledger`].
    pub async fn init_ledger(&self) -> Result<Vec<StudentRecord>> {
        self.contract.init_ledger(&self.context()).await
    }

    /// Issue a new transcript. See [`TranscriptContract::create_transcript`].
    #[allow(clippy::too_many_arguments)]
    pub async fn create_transcript(
        &self,
        student_id: &str,
        did: &str,
        degree_name: &str,
        gpa: f64,
        graduation_year: &str,
        ipfs_cid: &str,
        original_hash: &str,
        status: &str,
    ) -> Result<StudentRecord> {
        self.contract
            .create_transcript(
                &self.context(),
                student_id,
                did,
                degree_name,
                gpa,
                graduation_year,
                ipfs_cid,
                original_hash,
                status,
            )
            .await
    }

    /// Issue an already constructed record. See
    /// [`TranscriptContract::issue_transcript`].
    pub async fn issue_transcript(&self, record: StudentRecord) -> Result<StudentRecord> {
        self.contract.issue_transcript(&self.context(), record).await
    }

    /// Read a transcript. See [`TranscriptContract::query_transcript`].
    pub async fn query_transcript(&self, student_id: &str) -> Result<StudentRecord> {
        self.contract
            .query_transcript(&self.context(), student_id)
            .await
    }

    /// Check for a transcript. See [`TranscriptContract::transcript_exists`].
    pub async fn transcript_exists(&self, student_id: &str) -> Result<bool> {
        self.contract
            .transcript_exists(&self.context(), student_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkbar_ledger_store::MemoryStore;

    #[test]
    fn test_config_defaults() {
        let config = LedgerConfig::default();
        assert!(config.serialize_creates);
        assert!(!config.seed_on_open);
    }

    #[test]
    fn test_config_from_json() {
        let config = LedgerConfig::from_json(r#"{"seed_on_open": true}"#).unwrap();
        assert!(config.seed_on_open);
        assert!(config.serialize_creates);

        assert_eq!(LedgerConfig::from_json("{}").unwrap(), LedgerConfig::default());
        assert!(LedgerConfig::from_json(r#"{"seed_on_open": "yes"}"#).is_err());
    }

    #[tokio::test]
    async fn test_open_seeds_when_configured() {
        let config = LedgerConfig {
            seed_on_open: true,
            ..LedgerConfig::default()
        };
        let ledger = Ledger::open(MemoryStore::new(), config).await.unwrap();

        assert!(ledger.transcript_exists("STUDENT_001").await.unwrap());
        assert!(ledger.transcript_exists("STUDENT_002").await.unwrap());
    }

    #[tokio::test]
    async fn test_open_completes_partial_seed() {
        let store = Arc::new(MemoryStore::new());
        let first = seed_records().remove(0);
        store
            .put_state(first.student_id().as_str(), &first.to_bytes())
            .await
            .unwrap();

        let config = LedgerConfig {
            seed_on_open: true,
            ..LedgerConfig::default()
        };
        let ledger = Ledger::open(Arc::clone(&store), config).await.unwrap();

        assert_eq!(ledger.query_transcript("STUDENT_001").await.unwrap(), first);
        let second = ledger.query_transcript("STUDENT_002").await.unwrap();
        assert_eq!(second.degree_name(), "B.A. History");
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_ledgers_share_store_locks() {
        let store = Arc::new(MemoryStore::new());
        let a = Ledger::from_arc(Arc::clone(&store), LedgerConfig::default());
        let b = Ledger::from_arc(Arc::clone(&store), LedgerConfig::default());

        assert!(Arc::ptr_eq(&a.locks, &b.locks));
        assert!(Arc::ptr_eq(&a.locks, &store.key_locks().unwrap()));
    }

    #[tokio::test]
    async fn test_open_without_seed_is_empty() {
        let ledger = Ledger::open(MemoryStore::new(), LedgerConfig::default())
            .await
            .unwrap();
        assert!(ledger.store().is_empty());
    }
}
