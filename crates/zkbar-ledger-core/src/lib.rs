//! # ZKBAR Ledger Core
//!
//! Pure primitives for the ZKBAR ledger: student records and their canonical
//! encoding.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over credential records.
//!
//! ## Key Types
//!
//! - [`StudentRecord`] - An immutable academic credential record
//! - [`StudentId`] - The identifier a record is stored under
//! - [`RecordError`] - Failure to decode stored bytes into a record
//!
//! ## Canonicalization
//!
//! Records are encoded as JSON objects with sorted keys. See [`canonical`].

pub mod canonical;
pub mod error;
pub mod record;
pub mod types;

pub use canonical::{canonical_bytes, decode_record, fields};
pub use error::{RecordError, Result};
pub use record::{StudentRecord, STATUS_ISSUED};
pub use types::StudentId;
