//! # ZKBAR Ledger Testkit
//!
//! Testing utilities for the ZKBAR ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known records with their exact canonical encodings
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the canonical encoding byte for byte:
//!
//! ```rust
//! use zkbar_ledger_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, _) in verify_all_vectors() {
//!     assert!(ok, "{} drifted", name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use zkbar_ledger_testkit::generators::RecordParams;
//!
//! proptest! {
//!     #[test]
//!     fn encoding_is_deterministic(params: RecordParams) {
//!         let record = params.to_record();
//!         prop_assert_eq!(record.to_bytes(), record.clone().to_bytes());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use zkbar_ledger_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let record = fixture.make_record("STUDENT_123");
//! assert_eq!(record.student_id(), "STUDENT_123");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::RecordParams;
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
