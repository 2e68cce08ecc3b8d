//! Commit store
//!
//! Every commit lives in its own directory named by its id, directly under
//! `.pit`. A commit directory is written in full under a scratch name and
//! published with one rename, so an entry that is visible under its id is
//! always complete. Entries are never modified or deleted afterwards.

use crate::areas::workspace::Workspace;
use crate::artifacts::core::generate_temp_name;
use crate::artifacts::index::file_name::FileName;
use crate::artifacts::index::{parse_entries, serialize_entries};
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::{Commit, CommitMessage};
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{IoContext, PitError, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Snapshot of the tracked names inside a commit entry
pub const COMMIT_INDEX_FILE: &str = ".index";
/// Parent id inside a commit entry
pub const COMMIT_PARENT_FILE: &str = ".parent";
/// Message inside a commit entry
pub const COMMIT_MESSAGE_FILE: &str = ".message";

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn commit_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.as_ref())
    }

    /// Path of the stored copy of `name` inside commit `id`
    pub fn snapshot_path(&self, id: &CommitId, name: &FileName) -> PathBuf {
        self.commit_path(id).join(name)
    }

    /// Whether `id` names a stored commit (never true for the sentinel)
    pub fn exists(&self, id: &CommitId) -> bool {
        !id.is_sentinel() && self.commit_path(id).is_dir()
    }

    /// Draw an id that is neither the sentinel nor already in use
    pub fn generate_id(&self) -> CommitId {
        loop {
            let id = CommitId::generate();

            if id.is_sentinel() || self.commit_path(&id).exists() {
                tracing::warn!(id = %id, "generated commit id is taken, drawing again");
                continue;
            }

            return id;
        }
    }

    /// Write `commit` and a copy of every tracked file from `workspace`
    ///
    /// The entry is assembled in a scratch directory and renamed to its id
    /// only once complete. On failure the scratch directory is removed and
    /// nothing becomes visible.
    pub fn store(&self, commit: &Commit, workspace: &Workspace) -> Result<()> {
        let staging_path = self.path.join(generate_temp_name("commit"));
        let commit_path = self.commit_path(commit.id());

        if commit_path.exists() {
            return Err(PitError::corrupt(&commit_path, "commit entry already exists"));
        }

        std::fs::create_dir(&staging_path).io_context("create", &staging_path)?;

        let result = Self::write_entry(&staging_path, commit, workspace).and_then(|_| {
            // rename the staged entry to its id to publish it atomically
            std::fs::rename(&staging_path, &commit_path).io_context("publish", &commit_path)
        });

        if result.is_err() {
            Self::discard_staging(&staging_path);
        } else {
            tracing::debug!(id = %commit.id(), files = commit.index().len(), "commit entry stored");
        }

        result
    }

    fn write_entry(staging_path: &Path, commit: &Commit, workspace: &Workspace) -> Result<()> {
        let write = |name: &str, content: String| {
            let path = staging_path.join(name);
            std::fs::write(&path, content).io_context("write", &path)
        };

        write(COMMIT_INDEX_FILE, serialize_entries(commit.index()))?;
        write(COMMIT_PARENT_FILE, format!("{}\n", commit.parent()))?;
        write(COMMIT_MESSAGE_FILE, commit.message().to_string())?;

        for name in commit.index() {
            workspace.copy_file_to(name, &staging_path.join(name))?;
        }

        Ok(())
    }

    fn discard_staging(staging_path: &Path) {
        if let Err(err) = std::fs::remove_dir_all(staging_path) {
            tracing::warn!(
                path = %staging_path.display(),
                error = %err,
                "failed to remove staged commit entry"
            );
        }
    }

    /// Read the metadata of commit `id`
    pub fn load(&self, id: &CommitId) -> Result<Commit> {
        if !self.exists(id) {
            return Err(PitError::CommitNotFound { id: id.to_string() });
        }

        let commit_path = self.commit_path(id);

        let index_path = commit_path.join(COMMIT_INDEX_FILE);
        let index = std::fs::read_to_string(&index_path).io_context("read", &index_path)?;
        let index = parse_entries(&index, &index_path)?;

        let parent_path = commit_path.join(COMMIT_PARENT_FILE);
        let parent = std::fs::read_to_string(&parent_path).io_context("read", &parent_path)?;
        let parent = CommitId::try_parse(parent.trim())
            .map_err(|err| PitError::corrupt(&parent_path, err.to_string()))?;

        let message_path = commit_path.join(COMMIT_MESSAGE_FILE);
        let message = std::fs::read_to_string(&message_path).io_context("read", &message_path)?;
        let message = CommitMessage::try_parse(&message)
            .map_err(|err| PitError::corrupt(&message_path, err.to_string()))?;

        Ok(Commit::new(id.clone(), parent, message, index))
    }

    /// Stored bytes of `name` as of commit `id`
    pub fn read_file(&self, id: &CommitId, name: &FileName) -> Result<Bytes> {
        let path = self.snapshot_path(id, name);
        let data = std::fs::read(&path).io_context("read", &path)?;

        Ok(data.into())
    }

    /// Stored bytes of every file tracked by `commit`, in index order
    pub fn read_files(&self, commit: &Commit) -> Result<Vec<(FileName, Bytes)>> {
        commit
            .index()
            .iter()
            .map(|name| Ok((name.clone(), self.read_file(commit.id(), name)?)))
            .collect()
    }

    /// Walk parent links from `start` back to the sentinel
    pub fn history(&self, start: &CommitId) -> RevList<'_> {
        RevList::new(self, start.clone())
    }
}
