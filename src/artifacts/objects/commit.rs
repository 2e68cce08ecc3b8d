//! Commit records
//!
//! A commit is an immutable snapshot: the Index as it was at commit time, a
//! byte copy of every tracked file, a message and the id of the commit that
//! was current when it was made.
//!
//! ## Format
//!
//! On disk, one directory per commit:
//! ```text
//! .pit/<id>/.index     tracked file names, one per line
//! .pit/<id>/.parent    parent commit id (or the sentinel)
//! .pit/<id>/.message   commit message
//! .pit/<id>/<name>     stored bytes of each tracked file
//! ```

use crate::artifacts::index::file_name::FileName;
use crate::artifacts::objects::MESSAGE_MAX_LEN;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{PitError, Result};
use derive_new::new;

/// Validated commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    /// Validate a message, kept exactly as given
    ///
    /// The message must fit in `MESSAGE_MAX_LEN` bytes, surrounding
    /// whitespace included, and must not be blank.
    pub fn try_parse(message: &str) -> Result<Self> {
        if message.trim().is_empty() {
            return Err(PitError::EmptyMessage);
        }
        if message.len() > MESSAGE_MAX_LEN {
            return Err(PitError::MessageTooLong {
                len: message.len(),
                max: MESSAGE_MAX_LEN,
            });
        }

        Ok(Self(message.to_string()))
    }

    /// First line of the message
    pub fn short(&self) -> &str {
        self.0.lines().next().unwrap_or_default()
    }
}

impl AsRef<str> for CommitMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    id: CommitId,
    parent: CommitId,
    message: CommitMessage,
    index: Vec<FileName>,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    /// Parent commit id, the sentinel for a root commit
    pub fn parent(&self) -> &CommitId {
        &self.parent
    }

    pub fn message(&self) -> &CommitMessage {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.short()
    }

    /// Tracked file names at commit time, in Index order
    pub fn index(&self) -> &[FileName] {
        &self.index
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_sentinel()
    }
}
