//! Commit identifier
//!
//! Commit ids are 40-character lowercase hexadecimal strings drawn from 20
//! random bytes. They are not derived from the commit contents.
//!
//! ## Sentinel
//!
//! The all-zero id stands for the empty, pre-history state. It never names a
//! stored commit entry and terminates every parent chain.

use crate::artifacts::objects::COMMIT_ID_LENGTH;
use crate::errors::{PitError, Result};
use fake::rand;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit id
    ///
    /// Uppercase hex digits are accepted and normalized to lowercase.
    pub fn try_parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        if id.len() != COMMIT_ID_LENGTH {
            return Err(PitError::InvalidCommitId {
                reason: format!("expected {} characters, got {}", COMMIT_ID_LENGTH, id.len()),
                id,
            });
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PitError::InvalidCommitId {
                id,
                reason: "only hexadecimal digits are allowed".to_string(),
            });
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    pub fn sentinel() -> Self {
        Self("0".repeat(COMMIT_ID_LENGTH))
    }

    pub fn is_sentinel(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// Draw a fresh random id
    ///
    /// Uniqueness against existing commits is the caller's concern, see
    /// `Database::generate_id`.
    pub fn generate() -> Self {
        let bytes = rand::random::<[u8; COMMIT_ID_LENGTH / 2]>();
        Self(bytes.iter().map(|byte| format!("{:02x}", byte)).collect())
    }

    /// First 7 characters of the id
    pub fn to_short_id(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
