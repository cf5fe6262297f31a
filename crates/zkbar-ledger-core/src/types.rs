//! Strong type definitions for the ZKBAR ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier a student record is stored under.
///
/// This is the sole lookup key of the world state. No format is enforced:
/// the hosting runtime is trusted to pass sensible identifiers.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Create a new StudentId.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StudentId({})", self.0)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for StudentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StudentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_display() {
        let id = StudentId::from("STUDENT_001");
        assert_eq!(format!("{}", id), "STUDENT_001");
        assert_eq!(format!("{:?}", id), "StudentId(STUDENT_001)");
    }

    #[test]
    fn test_student_id_serializes_as_bare_string() {
        let id = StudentId::from("STUDENT_001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"STUDENT_001\"");

        let back: StudentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_empty_id_accepted() {
        let id = StudentId::new("");
        assert_eq!(id.as_str(), "");
    }
}
