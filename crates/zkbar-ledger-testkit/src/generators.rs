//! Proptest generators for property-based testing.

use proptest::prelude::*;

use zkbar_ledger_core::StudentRecord;

/// Generate a student id.
pub fn student_id() -> impl Strategy<Value = String> {
    "STUDENT_[0-9A-Z]{1,8}".prop_map(String::from)
}

/// Generate a DID.
pub fn did() -> impl Strategy<Value = String> {
    "did:zkbar:[0-9a-f]{1,16}".prop_map(String::from)
}

/// Generate a GPA, including the non-finite values construction accepts.
pub fn gpa() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 0.0f64..=4.0,
        1 => any::<f64>(),
        1 => Just(f64::NAN),
    ]
}

/// Generate free text, including quotes, control characters and non-ASCII.
pub fn free_text() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Parameters for generating a record.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub student_id: String,
    pub did: String,
    pub degree_name: String,
    pub gpa: f64,
    pub graduation_year: String,
    pub ipfs_cid: String,
    pub original_hash: String,
    pub status: String,
}

impl RecordParams {
    pub fn to_record(&self) -> StudentRecord {
        StudentRecord::new(
            self.student_id.as_str(),
            self.did.as_str(),
            self.degree_name.as_str(),
            self.gpa,
            self.graduation_year.as_str(),
            self.ipfs_cid.as_str(),
            self.original_hash.as_str(),
            self.status.as_str(),
        )
    }
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            student_id(),
            did(),
            free_text(),
            gpa(),
            "[0-9]{4}",
            "Qm[1-9A-HJ-NP-Za-km-z]{10,44}",
            free_text(),
            prop_oneof![Just("ISSUED".to_string()), free_text()],
        )
            .prop_map(
                |(student_id, did, degree_name, gpa, year, cid, hash, status)| RecordParams {
                    student_id,
                    did,
                    degree_name,
                    gpa,
                    graduation_year: year,
                    ipfs_cid: cid,
                    original_hash: hash,
                    status,
                },
            )
            .boxed()
    }
}
