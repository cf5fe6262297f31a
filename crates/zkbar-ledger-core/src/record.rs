//! StudentRecord: one issued academic credential.
//!
//! A record is immutable. Once constructed its fields cannot change; the
//! ledger only ever creates a record once and reads it back.

use std::hash::{Hash, Hasher};

use crate::canonical::{canonical_bytes, decode_record};
use crate::error::Result;
use crate::types::StudentId;

/// Status label for a freshly issued credential.
pub const STATUS_ISSUED: &str = "ISSUED";

/// An academic credential record, keyed by student id.
///
/// No validation is performed on construction. Empty strings and
/// non-finite GPAs are stored as given.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    student_id: StudentId,
    did: String,
    degree_name: String,
    gpa: f64,
    graduation_year: String,
    ipfs_cid: String,
    original_hash: String,
    status: String,
}

impl StudentRecord {
    /// Construct a record from its eight fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        student_id: impl Into<StudentId>,
        did: impl Into<String>,
        degree_name: impl Into<String>,
        gpa: f64,
        graduation_year: impl Into<String>,
        ipfs_cid: impl Into<String>,
        original_hash: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            did: did.into(),
            degree_name: degree_name.into(),
            gpa,
            graduation_year: graduation_year.into(),
            ipfs_cid: ipfs_cid.into(),
            original_hash: original_hash.into(),
            status: status.into(),
        }
    }

    /// Decode a record from its canonical bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_record(bytes)
    }

    /// Encode this record to canonical bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        canonical_bytes(self)
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    /// Decentralized identifier of the credential holder.
    pub fn did(&self) -> &str {
        &self.did
    }

    pub fn degree_name(&self) -> &str {
        &self.degree_name
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Issuance year label. Kept as text, never parsed.
    pub fn graduation_year(&self) -> &str {
        &self.graduation_year
    }

    /// Content address of the off-ledger document.
    pub fn ipfs_cid(&self) -> &str {
        &self.ipfs_cid
    }

    /// Integrity digest of the off-ledger document.
    pub fn original_hash(&self) -> &str {
        &self.original_hash
    }

    /// Lifecycle label, stored opaquely.
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Exact GPA identity: bitwise, except all NaNs are equal.
fn gpa_bits(gpa: f64) -> u64 {
    if gpa.is_nan() {
        f64::NAN.to_bits()
    } else {
        gpa.to_bits()
    }
}

impl PartialEq for StudentRecord {
    fn eq(&self, other: &Self) -> bool {
        self.student_id == other.student_id
            && self.did == other.did
            && self.degree_name == other.degree_name
            && gpa_bits(self.gpa) == gpa_bits(other.gpa)
            && self.graduation_year == other.graduation_year
            && self.ipfs_cid == other.ipfs_cid
            && self.original_hash == other.original_hash
            && self.status == other.status
    }
}

impl Eq for StudentRecord {}

impl Hash for StudentRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.student_id.hash(state);
        self.did.hash(state);
        self.degree_name.hash(state);
        gpa_bits(self.gpa).hash(state);
        self.graduation_year.hash(state);
        self.ipfs_cid.hash(state);
        self.original_hash.hash(state);
        self.status.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StudentRecord {
        StudentRecord::new(
            "STUDENT_123",
            "did:zkbar:123",
            "B.Sc",
            3.5,
            "2024",
            "QmHash",
            "OxHash",
            STATUS_ISSUED,
        )
    }

    #[test]
    fn test_accessors() {
        let record = sample();
        assert_eq!(record.student_id(), "STUDENT_123");
        assert_eq!(record.did(), "did:zkbar:123");
        assert_eq!(record.degree_name(), "B.Sc");
        assert_eq!(record.gpa(), 3.5);
        assert_eq!(record.graduation_year(), "2024");
        assert_eq!(record.ipfs_cid(), "QmHash");
        assert_eq!(record.original_hash(), "OxHash");
        assert_eq!(record.status(), "ISSUED");
    }

    #[test]
    fn test_equality_covers_every_field() {
        let base = sample();
        assert_eq!(base, sample());

        let variants = [
            StudentRecord::new("X", "did:zkbar:123", "B.Sc", 3.5, "2024", "QmHash", "OxHash", "ISSUED"),
            StudentRecord::new("STUDENT_123", "X", "B.Sc", 3.5, "2024", "QmHash", "OxHash", "ISSUED"),
            StudentRecord::new("STUDENT_123", "did:zkbar:123", "X", 3.5, "2024", "QmHash", "OxHash", "ISSUED"),
            StudentRecord::new("STUDENT_123", "did:zkbar:123", "B.Sc", 3.6, "2024", "QmHash", "OxHash", "ISSUED"),
            StudentRecord::new("STUDENT_123", "did:zkbar:123", "B.Sc", 3.5, "X", "QmHash", "OxHash", "ISSUED"),
            StudentRecord::new("STUDENT_123", "did:zkbar:123", "B.Sc", 3.5, "2024", "X", "OxHash", "ISSUED"),
            StudentRecord::new("STUDENT_123", "did:zkbar:123", "B.Sc", 3.5, "2024", "QmHash", "X", "ISSUED"),
            StudentRecord::new("STUDENT_123", "did:zkbar:123", "B.Sc", 3.5, "2024", "QmHash", "OxHash", "X"),
        ];
        for variant in variants {
            assert_ne!(base, variant);
        }
    }

    #[test]
    fn test_gpa_equality_is_exact() {
        let with_gpa = |gpa| StudentRecord::new("S", "d", "n", gpa, "y", "c", "h", "s");

        assert_eq!(with_gpa(f64::NAN), with_gpa(f64::NAN));
        assert_eq!(with_gpa(f64::INFINITY), with_gpa(f64::INFINITY));
        assert_ne!(with_gpa(0.0), with_gpa(-0.0));
        assert_ne!(with_gpa(0.1 + 0.2), with_gpa(0.3));
    }

    #[test]
    fn test_no_validation_on_construct() {
        let record = StudentRecord::new("", "", "", f64::NEG_INFINITY, "", "", "", "");
        assert_eq!(record.student_id().as_str(), "");
        assert_eq!(record.gpa(), f64::NEG_INFINITY);
    }
}
