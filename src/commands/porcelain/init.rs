use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::write_atomically;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{IoContext, PitError, Result};
use std::fs;

impl Repository {
    /// Create the repository directory if needed, then `.pit` with an empty
    /// index and the default branch attached at the sentinel
    pub fn init(&self) -> Result<()> {
        let pit_path = self.pit_path();

        if pit_path.exists() {
            return Err(PitError::AlreadyInitialized {
                path: self.path().to_path_buf(),
            });
        }

        fs::create_dir_all(self.path()).io_context("create", self.path())?;
        fs::create_dir(&pit_path).io_context("create", &pit_path)?;

        let sentinel = CommitId::sentinel();
        let default_branch = BranchName::default_branch();

        self.index().write_updates()?;
        self.refs().update_head(&sentinel)?;
        write_atomically(&self.refs().branches_path(), b"")?;
        self.refs().register_branch(&default_branch, &sentinel)?;
        self.refs().set_current_branch(Some(&default_branch))?;

        tracing::info!(path = %self.path().display(), "repository initialized");
        self.println(format!(
            "Initialized empty pit repository in {}",
            self.path().display()
        ))
    }
}
