//! Head pointer and branch registry
//!
//! This module manages the records that say which commit is current and
//! which branches exist.
//!
//! ## File Format
//!
//! All records are plain text under `.pit`, rewritten atomically:
//! - `head`: the current commit id (or the sentinel)
//! - `branches`: branch names in creation order, one per line
//! - `current-branch`: the active branch name, empty when detached
//! - `branch-head-<name>`: the stored head of each branch

use crate::artifacts::branch::HeadState;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::write_atomically;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{IoContext, PitError, Result};
use derive_new::new;
use std::path::{Path, PathBuf};

pub const HEAD_FILE: &str = "head";
pub const BRANCHES_FILE: &str = "branches";
pub const CURRENT_BRANCH_FILE: &str = "current-branch";
pub const BRANCH_HEAD_PREFIX: &str = "branch-head-";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.pit`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_FILE)
    }

    pub fn branches_path(&self) -> PathBuf {
        self.path.join(BRANCHES_FILE)
    }

    pub fn current_branch_path(&self) -> PathBuf {
        self.path.join(CURRENT_BRANCH_FILE)
    }

    pub fn branch_head_path(&self, name: &BranchName) -> PathBuf {
        self.path.join(format!("{}{}", BRANCH_HEAD_PREFIX, name))
    }

    pub fn read_head(&self) -> Result<CommitId> {
        Self::read_commit_id(&self.head_path())
    }

    pub fn update_head(&self, id: &CommitId) -> Result<()> {
        write_atomically(&self.head_path(), format!("{}\n", id).as_bytes())
    }

    /// Branch names in creation order
    pub fn read_branches(&self) -> Result<Vec<BranchName>> {
        let path = self.branches_path();
        let content = std::fs::read_to_string(&path).io_context("read", &path)?;

        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                BranchName::try_parse(line).map_err(|err| PitError::corrupt(&path, err.to_string()))
            })
            .collect()
    }

    /// Creation position of `name`, if registered
    pub fn lookup(&self, name: &BranchName) -> Result<Option<usize>> {
        Ok(self
            .read_branches()?
            .iter()
            .position(|branch| branch == name))
    }

    /// Append `name` to the registry with its head set to `head`
    ///
    /// The head slot is written before the name is listed, so a listed
    /// branch always has a head.
    pub fn register_branch(&self, name: &BranchName, head: &CommitId) -> Result<()> {
        let mut branches = self.read_branches()?;

        if branches.contains(name) {
            return Err(PitError::BranchExists {
                name: name.to_string(),
            });
        }

        self.update_branch_head(name, head)?;

        branches.push(name.clone());
        let content = branches
            .iter()
            .map(|branch| format!("{}\n", branch))
            .collect::<String>();
        write_atomically(&self.branches_path(), content.as_bytes())?;

        tracing::debug!(branch = %name, head = %head, "branch registered");
        Ok(())
    }

    pub fn read_branch_head(&self, name: &BranchName) -> Result<CommitId> {
        Self::read_commit_id(&self.branch_head_path(name))
    }

    pub fn update_branch_head(&self, name: &BranchName, id: &CommitId) -> Result<()> {
        write_atomically(&self.branch_head_path(name), format!("{}\n", id).as_bytes())
    }

    /// Active branch, or None when detached
    pub fn current_branch(&self) -> Result<Option<BranchName>> {
        let path = self.current_branch_path();
        let content = std::fs::read_to_string(&path).io_context("read", &path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        BranchName::try_parse(content)
            .map(Some)
            .map_err(|err| PitError::corrupt(&path, err.to_string()))
    }

    pub fn set_current_branch(&self, name: Option<&BranchName>) -> Result<()> {
        let content = name.map(|name| format!("{}\n", name)).unwrap_or_default();
        write_atomically(&self.current_branch_path(), content.as_bytes())
    }

    pub fn head_state(&self) -> Result<HeadState> {
        match self.current_branch()? {
            Some(branch) => Ok(HeadState::Attached(branch)),
            None => Ok(HeadState::Detached(self.read_head()?)),
        }
    }

    /// Save the head pointer into the current branch's slot, if attached
    pub fn persist_current_head(&self) -> Result<()> {
        if let Some(branch) = self.current_branch()? {
            self.update_branch_head(&branch, &self.read_head()?)?;
        }

        Ok(())
    }

    fn read_commit_id(path: &Path) -> Result<CommitId> {
        let content = std::fs::read_to_string(path).io_context("read", path)?;

        CommitId::try_parse(content.trim()).map_err(|err| PitError::corrupt(path, err.to_string()))
    }
}
