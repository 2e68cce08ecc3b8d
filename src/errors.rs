//! Error types for repository operations
//!
//! Every failure carries the entity it is about (file name, branch name,
//! commit id or path). Errors fall into three kinds:
//!
//! - `Validation`: malformed input, rejected before anything is read or written
//! - `State`: the request conflicts with the current repository state
//! - `Io`: the filesystem refused an operation; multi-step operations may
//!   have been interrupted halfway, so the repository may need inspection

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    State,
    Io,
}

#[derive(Debug, Error)]
pub enum PitError {
    #[error("invalid file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    #[error("pathspec '{name}' did not match a regular file")]
    MissingFile { name: String },

    #[error("invalid branch name '{name}': {reason}")]
    InvalidBranchName { name: String, reason: String },

    #[error("invalid commit id '{id}': {reason}")]
    InvalidCommitId { id: String, reason: String },

    #[error("commit message cannot be empty")]
    EmptyMessage,

    #[error("commit message is too long ({len} bytes, at most {max} allowed)")]
    MessageTooLong { len: usize, max: usize },

    #[error("not a pit repository: {}", path.display())]
    NotARepository { path: PathBuf },

    #[error("repository is already initialized at {}", path.display())]
    AlreadyInitialized { path: PathBuf },

    #[error("file {name} is already tracked")]
    AlreadyTracked { name: String },

    #[error("file {name} is not tracked")]
    NotTracked { name: String },

    #[error("cannot commit in detached HEAD state, switch to a branch first")]
    DetachedHeadCommit,

    #[error("commit {id} not found")]
    CommitNotFound { id: String },

    #[error("branch {name} not found")]
    BranchNotFound { name: String },

    #[error("branch {name} already exists")]
    BranchExists { name: String },

    #[error("corrupt record {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PitError>;

impl PitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PitError::InvalidFileName { .. }
            | PitError::MissingFile { .. }
            | PitError::InvalidBranchName { .. }
            | PitError::InvalidCommitId { .. }
            | PitError::EmptyMessage
            | PitError::MessageTooLong { .. } => ErrorKind::Validation,
            PitError::NotARepository { .. }
            | PitError::AlreadyInitialized { .. }
            | PitError::AlreadyTracked { .. }
            | PitError::NotTracked { .. }
            | PitError::DetachedHeadCommit
            | PitError::CommitNotFound { .. }
            | PitError::BranchNotFound { .. }
            | PitError::BranchExists { .. } => ErrorKind::State,
            PitError::Corrupt { .. } | PitError::Io { .. } | PitError::Output(_) => ErrorKind::Io,
        }
    }

    /// Process exit code for this error (usage errors are reported by clap with 2)
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::State => 1,
            ErrorKind::Io => 3,
        }
    }

    pub(crate) fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        PitError::Corrupt {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Attach the failing action and path to a raw I/O error
pub(crate) trait IoContext<T> {
    fn io_context(self, action: &'static str, path: &Path) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context(self, action: &'static str, path: &Path) -> Result<T> {
        self.map_err(|source| PitError::Io {
            action,
            path: path.to_path_buf(),
            source,
        })
    }
}
