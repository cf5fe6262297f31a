//! # ZKBAR Ledger
//!
//! The unified API for the ZKBAR credential ledger: academic transcripts
//! recorded once under a student id and read back by point lookup.
//!
//! ## Overview
//!
//! - **Records**: Immutable credential records. Never edited, never deleted.
//! - **World state**: A key-value store; each record lives under its student id.
//! - **Contract**: Create-if-absent, query, and existence checks over the store.
//! - **Context**: A per-call handle binding an operation to a store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zkbar_ledger::{Ledger, LedgerConfig};
//! use zkbar_ledger::store::SqliteStore;
//!
//! async fn example() {
//!     // Open storage
//!     let store = SqliteStore::open("ledger.db").unwrap();
//!
//!     // Create the ledger
//!     let ledger = Ledger::new(store, LedgerConfig::default());
//!
//!     // Issue a transcript
//!     ledger
//!         .create_transcript(
//!             "STUDENT_123", "did:zkbar:123", "B.Sc", 3.5, "2024", "QmHash", "OxHash", "ISSUED",
//!         )
//!         .await
//!         .unwrap();
//!
//!     // Read it back
//!     let found = ledger.query_transcript("STUDENT_123").await.unwrap();
//!     assert_eq!(found.degree_name(), "B.Sc");
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `zkbar_ledger::core` - Records and their encoding
//! - `zkbar_ledger::store` - World-state abstraction, memory and SQLite stores

pub mod context;
pub mod contract;
pub mod error;
pub mod ledger;

// Re-export component crates
pub use zkbar_ledger_core as core;
pub use zkbar_ledger_store as store;

// Re-export main types for convenience
pub use context::{TxContext, TxId};
pub use contract::{seed_records, TranscriptContract};
pub use error::{ContractError, Result};
pub use ledger::{Ledger, LedgerConfig};

pub use zkbar_ledger_core::{StudentId, StudentRecord, STATUS_ISSUED};
