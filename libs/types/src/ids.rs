//! Identifier types for contribution entities
//!
//! Identifiers are carried verbatim from the source records: no case folding,
//! no punctuation stripping, no dedup across alternate spellings of the same
//! donor. Two spellings are two donors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the recipient committee (`CMTE_ID` in the source schema)
///
/// Always non-empty; records without a committee id never make it past
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitteeId(String);

impl CommitteeId {
    /// Create a new CommitteeId from a string
    ///
    /// # Panics
    /// Panics if the id is empty
    pub fn new(id: impl Into<String>) -> Self {
        let s = id.into();
        assert!(!s.is_empty(), "CommitteeId must not be empty");
        Self(s)
    }

    /// Try to create a CommitteeId, returning None if empty
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let s = id.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Get the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitteeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommitteeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Five-character postal code (`ZIP_CODE` truncated to its first five characters)
///
/// Raw zip fields may carry the full ZIP+4 form; only the leading five
/// characters identify the area used for grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    /// Try to create a ZipCode from a raw zip field
    ///
    /// Returns None if the field has fewer than five characters. Longer
    /// fields are truncated to their first five characters.
    pub fn try_new(raw: &str) -> Option<Self> {
        if raw.chars().count() < 5 {
            None
        } else {
            Some(Self(raw.chars().take(5).collect()))
        }
    }

    /// Get the five-character zip string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a donor: name plus five-character zip
///
/// Committee is deliberately excluded; the same person donating to two
/// committees is still one donor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DonorKey {
    name: String,
    zip: ZipCode,
}

impl DonorKey {
    /// Create a new DonorKey
    pub fn new(name: impl Into<String>, zip: ZipCode) -> Self {
        Self {
            name: name.into(),
            zip,
        }
    }

    /// Donor name as it appeared in the source record
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Five-character zip of the donor
    pub fn zip(&self) -> &ZipCode {
        &self.zip
    }
}

impl fmt::Display for DonorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.zip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committee_id_creation() {
        let id = CommitteeId::new("C00384516");
        assert_eq!(id.as_str(), "C00384516");
    }

    #[test]
    fn test_committee_id_try_new() {
        assert!(CommitteeId::try_new("C00384516").is_some());
        assert!(CommitteeId::try_new("").is_none());
    }

    #[test]
    #[should_panic(expected = "CommitteeId must not be empty")]
    fn test_committee_id_empty_panics() {
        CommitteeId::new("");
    }

    #[test]
    fn test_committee_id_serialization() {
        let id = CommitteeId::new("C00177436");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"C00177436\"");

        let deserialized: CommitteeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_zip_code_truncation() {
        let zip = ZipCode::try_new("307502818").unwrap();
        assert_eq!(zip.as_str(), "30750");
    }

    #[test]
    fn test_zip_code_exact_five() {
        let zip = ZipCode::try_new("90210").unwrap();
        assert_eq!(zip.as_str(), "90210");
    }

    #[test]
    fn test_zip_code_too_short() {
        assert!(ZipCode::try_new("").is_none());
        assert!(ZipCode::try_new("9021").is_none());
    }

    #[test]
    fn test_zip_code_preserved_verbatim() {
        // Non-digit zips are not rejected here; validation only requires length
        let zip = ZipCode::try_new("AB12345").unwrap();
        assert_eq!(zip.as_str(), "AB123");
    }

    #[test]
    fn test_donor_key_identity() {
        let zip = ZipCode::try_new("30750").unwrap();
        let a = DonorKey::new("SABOURIN, JAMES", zip.clone());
        let b = DonorKey::new("SABOURIN, JAMES", zip);
        assert_eq!(a, b);
    }

    #[test]
    fn test_donor_key_distinct_spellings() {
        let zip = ZipCode::try_new("30750").unwrap();
        let a = DonorKey::new("DOE, JOHN", zip.clone());
        let b = DonorKey::new("DOE JOHN", zip);
        assert_ne!(a, b, "spellings are not normalized");
    }

    #[test]
    fn test_donor_key_serialization() {
        let key = DonorKey::new("DOE, JOHN", ZipCode::try_new("90210").unwrap());
        let json = serde_json::to_string(&key).unwrap();
        let deserialized: DonorKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }
}
