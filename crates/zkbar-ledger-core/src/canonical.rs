//! Canonical JSON encoding for student records.
//!
//! The encoding is a JSON object holding exactly the eight record fields
//! under their wire names. It is written by hand rather than derived:
//! - Keys are emitted in sorted byte order
//! - No whitespace
//! - Finite GPAs are JSON numbers (shortest round-trip form)
//! - Non-finite GPAs are the strings `"NaN"`, `"Infinity"`, `"-Infinity"`
//!
//! The same record always produces identical bytes.

use serde_json::{Map, Number, Value};

use crate::error::{RecordError, Result};
use crate::record::StudentRecord;
use crate::types::StudentId;

/// Wire names of the record fields.
pub mod fields {
    pub const STUDENT_ID: &str = "studentId";
    pub const DID: &str = "did";
    pub const DEGREE_NAME: &str = "degreeName";
    pub const GPA: &str = "gpa";
    pub const GRADUATION_YEAR: &str = "graduationYear";
    pub const IPFS_CID: &str = "ipfsCid";
    pub const ORIGINAL_HASH: &str = "originalHash";
    pub const STATUS: &str = "status";

    /// All eight names, in no particular order.
    pub const ALL: [&str; 8] = [
        STUDENT_ID,
        DID,
        DEGREE_NAME,
        GPA,
        GRADUATION_YEAR,
        IPFS_CID,
        ORIGINAL_HASH,
        STATUS,
    ];
}

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

/// Encode a record to canonical bytes.
pub fn canonical_bytes(record: &StudentRecord) -> Vec<u8> {
    let mut entries = vec![
        (fields::STUDENT_ID, text(record.student_id().as_str())),
        (fields::DID, text(record.did())),
        (fields::DEGREE_NAME, text(record.degree_name())),
        (fields::GPA, gpa_to_value(record.gpa())),
        (fields::GRADUATION_YEAR, text(record.graduation_year())),
        (fields::IPFS_CID, text(record.ipfs_cid())),
        (fields::ORIGINAL_HASH, text(record.original_hash())),
        (fields::STATUS, text(record.status())),
    ];
    entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let mut out = String::with_capacity(256);
    out.push('{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // Display on Value writes compact, escaped JSON.
        out.push_str(&text(key).to_string());
        out.push(':');
        out.push_str(&value.to_string());
    }
    out.push('}');
    out.into_bytes()
}

fn text(s: &str) -> Value {
    Value::String(s.to_owned())
}

fn gpa_to_value(gpa: f64) -> Value {
    match Number::from_f64(gpa) {
        Some(n) => Value::Number(n),
        None if gpa.is_nan() => text(NAN),
        None if gpa.is_sign_positive() => text(INFINITY),
        None => text(NEG_INFINITY),
    }
}

/// Decode a record from canonical bytes.
///
/// Any JSON object carrying the eight fields with compatible types is
/// accepted, regardless of key order or whitespace. Unknown keys are ignored.
pub fn decode_record(bytes: &[u8]) -> Result<StudentRecord> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| RecordError::Malformed(format!("invalid JSON: {}", e)))?;

    let map = match value {
        Value::Object(m) => m,
        _ => return Err(RecordError::Malformed("expected object".into())),
    };

    Ok(StudentRecord::new(
        StudentId::new(get_string(&map, fields::STUDENT_ID)?),
        get_string(&map, fields::DID)?,
        get_string(&map, fields::DEGREE_NAME)?,
        get_gpa(&map)?,
        get_string(&map, fields::GRADUATION_YEAR)?,
        get_string(&map, fields::IPFS_CID)?,
        get_string(&map, fields::ORIGINAL_HASH)?,
        get_string(&map, fields::STATUS)?,
    ))
}

fn get_string(map: &Map<String, Value>, field: &str) -> Result<String> {
    match map.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(RecordError::wrong_type(field, "a string")),
        None => Err(RecordError::missing(field)),
    }
}

fn get_gpa(map: &Map<String, Value>) -> Result<f64> {
    match map.get(fields::GPA) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| RecordError::wrong_type(fields::GPA, "a number")),
        Some(Value::String(s)) => match s.as_str() {
            NAN => Ok(f64::NAN),
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            _ => Err(RecordError::wrong_type(fields::GPA, "a number")),
        },
        Some(_) => Err(RecordError::wrong_type(fields::GPA, "a number")),
        None => Err(RecordError::missing(fields::GPA)),
    }
}
