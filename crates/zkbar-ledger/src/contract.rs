//! The transcript contract: create-once, read-many student records.
//!
//! Each student id is a key of the world state with two states, absent and
//! present. `create_transcript` moves a key from absent to present and
//! fails if it is already present. Queries and existence checks only
//! observe. Nothing moves a key back to absent or rewrites a present one.
//!
//! A key holding zero bytes counts as absent.

use zkbar_ledger_core::{StudentId, StudentRecord, STATUS_ISSUED};
use zkbar_ledger_store::{WorldState, WorldStateExt};

use crate::context::TxContext;
use crate::error::{ContractError, Result};

/// Stateless transcript contract. All state lives in the context's store.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptContract;

impl TranscriptContract {
    pub const NAME: &'static str = "TranscriptContract";
    pub const TITLE: &'static str = "ZKBAR-V Transcript Contract";
    pub const VERSION: &'static str = "0.1.0";

    pub fn new() -> Self {
        Self
    }

    /// Seed the ledger with the two sample transcripts.
    ///
    /// Not idempotent: once seeded, a second call fails with
    /// [`ContractError::AlreadyExists`] on the first sample id.
    pub async fn init_ledger<S: WorldState>(
        &self,
        ctx: &TxContext<S>,
    ) -> Result<Vec<StudentRecord>> {
        let mut created = Vec::with_capacity(2);
        for record in seed_records() {
            created.push(self.issue_transcript(ctx, record).await?);
        }

        tracing::info!(tx_id = %ctx.tx_id(), count = created.len(), "ledger initialized with sample transcripts");
        Ok(created)
    }

    /// Issue a new transcript built from its fields.
    ///
    /// Fails with [`ContractError::AlreadyExists`] without writing if the
    /// student id is already present. On success exactly one value is
    /// written, under the student id.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_transcript<S: WorldState>(
        &self,
        ctx: &TxContext<S>,
        student_id: &str,
        did: &str,
        degree_name: &str,
        gpa: f64,
        graduation_year: &str,
        ipfs_cid: &str,
        original_hash: &str,
        status: &str,
    ) -> Result<StudentRecord> {
        let record = StudentRecord::new(
            student_id,
            did,
            degree_name,
            gpa,
            graduation_year,
            ipfs_cid,
            original_hash,
            status,
        );
        self.issue_transcript(ctx, record).await
    }

    /// Issue an already constructed record. Same rules as
    /// [`create_transcript`](Self::create_transcript).
    pub async fn issue_transcript<S: WorldState>(
        &self,
        ctx: &TxContext<S>,
        record: StudentRecord,
    ) -> Result<StudentRecord> {
        let key = record.student_id().as_str();

        // Held until return so no other create on this key interleaves.
        let _guard = ctx.lock_key(key).await?;

        if self.transcript_exists(ctx, key).await? {
            tracing::warn!(
                tx_id = %ctx.tx_id(),
                student_id = %key,
                "transcript already exists, create rejected"
            );
            return Err(ContractError::AlreadyExists(record.student_id().clone()));
        }

        ctx.store().put_state(key, &record.to_bytes()).await?;

        tracing::info!(
            tx_id = %ctx.tx_id(),
            student_id = %key,
            status = %record.status(),
            "transcript created"
        );
        Ok(record)
    }

    /// Read a transcript by student id.
    pub async fn query_transcript<S: WorldState>(
        &self,
        ctx: &TxContext<S>,
        student_id: &str,
    ) -> Result<StudentRecord> {
        tracing::debug!(tx_id = %ctx.tx_id(), student_id = %student_id, "querying transcript");

        let bytes = match ctx.store().get_state(student_id).await? {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return Err(ContractError::NotFound(StudentId::from(student_id))),
        };

        StudentRecord::from_bytes(&bytes).map_err(|source| {
            tracing::error!(
                tx_id = %ctx.tx_id(),
                student_id = %student_id,
                error = %source,
                "stored transcript failed to decode"
            );
            ContractError::MalformedRecord {
                student_id: StudentId::from(student_id),
                source,
            }
        })
    }

    /// Check whether a transcript is stored under `student_id`.
    pub async fn transcript_exists<S: WorldState>(
        &self,
        ctx: &TxContext<S>,
        student_id: &str,
    ) -> Result<bool> {
        let exists = ctx.store().has_state(student_id).await?;
        tracing::debug!(tx_id = %ctx.tx_id(), student_id = %student_id, exists, "transcript existence checked");
        Ok(exists)
    }
}

/// The fixed sample transcripts written by `init_ledger`.
pub fn seed_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(
            "STUDENT_001",
            "did:zkbar:12345",
            "B.Sc Computer Science",
            3.8,
            "2024",
            "QmHash123...",
            "SHA256_HASH_XYZ",
            STATUS_ISSUED,
        ),
        StudentRecord::new(
            "STUDENT_002",
            "did:zkbar:67890",
            "B.A. History",
            3.5,
            "2024",
            "QmHash456...",
            "SHA256_HASH_ABC",
            STATUS_ISSUED,
        ),
    ]
}
