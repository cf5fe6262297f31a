//! Error types for the transcript contract.

use thiserror::Error;
use zkbar_ledger_core::{RecordError, StudentId};
use zkbar_ledger_store::StoreError;

/// Errors that can occur during contract operations.
#[derive(Debug, Error)]
pub enum ContractError {
    /// A transcript is already stored under this id.
    #[error("Transcript for Student ID {0} already exists")]
    AlreadyExists(StudentId),

    /// No transcript is stored under this id.
    #[error("Transcript for Student ID {0} does not exist")]
    NotFound(StudentId),

    /// The stored bytes do not decode into a record.
    #[error("Transcript for Student ID {student_id} is unreadable: {source}")]
    MalformedRecord {
        student_id: StudentId,
        #[source]
        source: RecordError,
    },

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ContractError {
    /// Stable error code reported to the invoking runtime.
    pub fn code(&self) -> &'static str {
        match self {
            ContractError::AlreadyExists(_) => "TRANSCRIPT_ALREADY_EXISTS",
            ContractError::NotFound(_) => "TRANSCRIPT_NOT_FOUND",
            ContractError::MalformedRecord { .. } => "MALFORMED_RECORD",
            ContractError::Store(_) => "STORE_FAILURE",
        }
    }

    /// The student id the failure concerns, if any.
    pub fn student_id(&self) -> Option<&StudentId> {
        match self {
            ContractError::AlreadyExists(id) | ContractError::NotFound(id) => Some(id),
            ContractError::MalformedRecord { student_id, .. } => Some(student_id),
            ContractError::Store(_) => None,
        }
    }
}

/// Result type for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
