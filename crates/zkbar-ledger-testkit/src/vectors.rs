//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the canonical encoding of a record byte for byte.
//! Any change to key order, number formatting, or escaping breaks them.

use zkbar_ledger_core::{canonical_bytes, decode_record, StudentRecord};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub student_id: &'static str,
    pub did: &'static str,
    pub degree_name: &'static str,
    pub gpa: f64,
    pub graduation_year: &'static str,
    pub ipfs_cid: &'static str,
    pub original_hash: &'static str,
    pub status: &'static str,
    /// Expected canonical encoding.
    pub expected: &'static str,
}

impl GoldenVector {
    pub fn record(&self) -> StudentRecord {
        StudentRecord::new(
            self.student_id,
            self.did,
            self.degree_name,
            self.gpa,
            self.graduation_year,
            self.ipfs_cid,
            self.original_hash,
            self.status,
        )
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "first sample transcript",
            student_id: "STUDENT_001",
            did: "did:zkbar:12345",
            degree_name: "B.Sc Computer Science",
            gpa: 3.8,
            graduation_year: "2024",
            ipfs_cid: "QmHash123...",
            original_hash: "SHA256_HASH_XYZ",
            status: "ISSUED",
            expected: r#"{"degreeName":"B.Sc Computer Science","did":"did:zkbar:12345","gpa":3.8,"graduationYear":"2024","ipfsCid":"QmHash123...","originalHash":"SHA256_HASH_XYZ","status":"ISSUED","studentId":"STUDENT_001"}"#,
        },
        GoldenVector {
            name: "second sample transcript",
            student_id: "STUDENT_002",
            did: "did:zkbar:67890",
            degree_name: "B.A. History",
            gpa: 3.5,
            graduation_year: "2024",
            ipfs_cid: "QmHash456...",
            original_hash: "SHA256_HASH_ABC",
            status: "ISSUED",
            expected: r#"{"degreeName":"B.A. History","did":"did:zkbar:67890","gpa":3.5,"graduationYear":"2024","ipfsCid":"QmHash456...","originalHash":"SHA256_HASH_ABC","status":"ISSUED","studentId":"STUDENT_002"}"#,
        },
        GoldenVector {
            name: "all fields empty",
            student_id: "",
            did: "",
            degree_name: "",
            gpa: 0.0,
            graduation_year: "",
            ipfs_cid: "",
            original_hash: "",
            status: "",
            expected: r#"{"degreeName":"","did":"","gpa":0.0,"graduationYear":"","ipfsCid":"","originalHash":"","status":"","studentId":""}"#,
        },
        GoldenVector {
            name: "whole-number gpa",
            student_id: "STUDENT_123",
            did: "did:zkbar:123",
            degree_name: "B.Sc",
            gpa: 4.0,
            graduation_year: "2024",
            ipfs_cid: "QmHash",
            original_hash: "OxHash",
            status: "ISSUED",
            expected: r#"{"degreeName":"B.Sc","did":"did:zkbar:123","gpa":4.0,"graduationYear":"2024","ipfsCid":"QmHash","originalHash":"OxHash","status":"ISSUED","studentId":"STUDENT_123"}"#,
        },
        GoldenVector {
            name: "not-a-number gpa",
            student_id: "STUDENT_NAN",
            did: "did:zkbar:nan",
            degree_name: "B.Sc",
            gpa: f64::NAN,
            graduation_year: "2024",
            ipfs_cid: "QmHash",
            original_hash: "OxHash",
            status: "ISSUED",
            expected: r#"{"degreeName":"B.Sc","did":"did:zkbar:nan","gpa":"NaN","graduationYear":"2024","ipfsCid":"QmHash","originalHash":"OxHash","status":"ISSUED","studentId":"STUDENT_NAN"}"#,
        },
        GoldenVector {
            name: "escaped and non-ASCII text",
            student_id: "STUDENT_ESC",
            did: "did:zkbar:\u{e9}",
            degree_name: "B.Sc \"Hons\"\n",
            gpa: 3.25,
            graduation_year: "2024",
            ipfs_cid: "Qm\\Hash",
            original_hash: "OxHash",
            status: "ISSUED",
            expected: "{\"degreeName\":\"B.Sc \\\"Hons\\\"\\n\",\"did\":\"did:zkbar:\u{e9}\",\"gpa\":3.25,\"graduationYear\":\"2024\",\"ipfsCid\":\"Qm\\\\Hash\",\"originalHash\":\"OxHash\",\"status\":\"ISSUED\",\"studentId\":\"STUDENT_ESC\"}",
        },
    ]
}

/// Verify every golden vector encodes to its expected bytes and decodes back.
///
/// Returns `(name, ok, actual_encoding)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let record = v.record();
            let bytes = canonical_bytes(&record);
            let actual = String::from_utf8_lossy(&bytes).into_owned();
            let decodes = decode_record(&bytes).map_or(false, |back| back == record);

            (v.name.to_string(), decodes && actual == v.expected, actual)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, ok, actual) in verify_all_vectors() {
            assert!(ok, "vector '{}' drifted: {}", name, actual);
        }
    }

    #[test]
    fn test_sample_vectors_match_seed_records() {
        let seeds = zkbar_ledger::seed_records();
        let vectors = all_vectors();
        assert_eq!(vectors[0].record(), seeds[0]);
        assert_eq!(vectors[1].record(), seeds[1]);
    }

    #[test]
    fn test_expected_is_valid_json() {
        for vector in all_vectors() {
            let value: serde_json::Value = serde_json::from_str(vector.expected).unwrap();
            assert_eq!(value.as_object().map(|m| m.len()), Some(8), "{}", vector.name);
        }
    }
}
