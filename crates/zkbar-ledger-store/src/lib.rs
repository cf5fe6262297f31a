//! # ZKBAR Ledger Store
//!
//! World-state storage for the ZKBAR ledger. Provides a trait-based
//! key-value interface with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store module abstracts the world state behind the [`WorldState`]
//! trait: string keys map to opaque byte values, with `get` and an
//! overwriting `put`. The contract layer never sees which backend it runs
//! on. The persistent implementation is [`SqliteStore`], with
//! [`MemoryStore`] for tests and ephemeral ledgers.
//!
//! ## Key Types
//!
//! - [`WorldState`] - The async trait for state access
//! - [`WorldStateExt`] - Presence checks and string-typed helpers
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage
//! - [`KeyLocks`] - Per-key mutual exclusion for check-then-write sequences
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zkbar_ledger_store::{SqliteStore, WorldState};
//!
//! async fn example() {
//!     // Open a SQLite database
//!     let store = SqliteStore::open("ledger.db").unwrap();
//!
//!     // Or use an in-memory database for testing
//!     let store = SqliteStore::open_memory().unwrap();
//!
//!     store.put_state("STUDENT_001", b"{}").await.unwrap();
//!     let value = store.get_state("STUDENT_001").await.unwrap();
//!     assert!(value.is_some());
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **No isolation**: Neither backend offers transactions spanning a read
//!   and a later write. Each store owns a [`KeyLocks`] registry, exposed by
//!   `WorldState::key_locks`; callers that need check-then-write atomicity
//!   take a guard from it around the sequence.
//! - **Overwrite semantics**: `put_state` replaces any existing value.

pub mod error;
pub mod locks;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use locks::{KeyGuard, KeyLocks};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{WorldState, WorldStateExt};
