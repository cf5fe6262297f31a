//! Error types for the ZKBAR ledger core.

use thiserror::Error;

/// Errors that can occur while decoding a stored record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The bytes do not decode into the eight-field record shape.
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl RecordError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::Malformed(format!("missing field `{}`", field))
    }

    pub(crate) fn wrong_type(field: &str, expected: &str) -> Self {
        Self::Malformed(format!("field `{}` must be {}", field, expected))
    }
}

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, RecordError>;
