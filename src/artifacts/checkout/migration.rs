//! Checkout migration
//!
//! Moving the working directory to another commit happens in two phases:
//!
//! 1. Planning: the target commit is loaded and every stored copy it needs
//!    is staged into a scratch directory inside `.pit`. Nothing visible has
//!    changed yet, so any failure here leaves the repository untouched.
//! 2. Applying: every file named by the current index is deleted, the
//!    staged copies are renamed into place and the index is swapped for the
//!    target's snapshot.
//!
//! Deletions always run before restorations, so files that the target does
//! not track are never left behind.

use crate::areas::repository::Repository;
use crate::artifacts::core::generate_temp_name;
use crate::artifacts::index::file_name::FileName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{IoContext, Result};
use std::path::PathBuf;

pub struct Migration<'r> {
    repository: &'r Repository,
    target: CommitId,
    /// Names tracked before the checkout, removed from the working directory
    deletions: Vec<FileName>,
    /// Names tracked by the target, restored from staged copies
    restorations: Vec<FileName>,
    /// Scratch directory holding the staged copies, until applied
    staging_path: Option<PathBuf>,
}

impl<'r> Migration<'r> {
    /// Plan a checkout of `target` and stage its files
    ///
    /// The sentinel has no stored entry: it plans an empty restoration.
    pub fn plan(repository: &'r Repository, target: &CommitId) -> Result<Self> {
        let deletions = {
            let mut index = repository.index();
            index.rehydrate()?;
            index.entries().to_vec()
        };

        let mut migration = Migration {
            repository,
            target: target.clone(),
            deletions,
            restorations: Vec::new(),
            staging_path: None,
        };

        if target.is_sentinel() {
            return Ok(migration);
        }

        let commit = repository.database().load(target)?;
        let staging_path = repository
            .pit_path()
            .join(generate_temp_name("checkout"));
        std::fs::create_dir(&staging_path).io_context("create", &staging_path)?;
        // from here on, dropping the migration removes the scratch directory
        migration.staging_path = Some(staging_path.clone());

        for name in commit.index() {
            let stored = repository.database().snapshot_path(target, name);
            let staged = staging_path.join(name);
            std::fs::copy(&stored, &staged).io_context("stage", &stored)?;
        }
        migration.restorations = commit.index().to_vec();

        tracing::debug!(
            target = %target,
            deletions = migration.deletions.len(),
            restorations = migration.restorations.len(),
            "checkout planned"
        );
        Ok(migration)
    }

    pub fn target(&self) -> &CommitId {
        &self.target
    }

    pub fn deletions(&self) -> &[FileName] {
        &self.deletions
    }

    pub fn restorations(&self) -> &[FileName] {
        &self.restorations
    }

    /// Rewrite the working directory and the index to match the target
    pub fn apply(mut self) -> Result<()> {
        let workspace = self.repository.workspace();

        for name in &self.deletions {
            if !workspace.remove_file(name)? {
                tracing::warn!(file = %name, "tracked file was already missing from the working directory");
            }
        }

        if let Some(staging_path) = &self.staging_path {
            for name in &self.restorations {
                workspace.restore_file(&staging_path.join(name), name)?;
            }
        }

        let mut index = self.repository.index();
        index.replace(std::mem::take(&mut self.restorations));
        index.write_updates()?;

        Ok(())
    }
}

impl Drop for Migration<'_> {
    fn drop(&mut self) {
        if let Some(staging_path) = self.staging_path.take()
            && let Err(err) = std::fs::remove_dir_all(&staging_path)
        {
            tracing::warn!(
                path = %staging_path.display(),
                error = %err,
                "failed to remove checkout staging directory"
            );
        }
    }
}
