use crate::areas::repository::Repository;
use crate::artifacts::branch::HeadState;
use crate::artifacts::objects::commit::{Commit, CommitMessage};
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{PitError, Result};

impl Repository {
    /// Snapshot the index and the tracked files as a new commit on the
    /// current branch
    ///
    /// The commit entry is fully stored before `head` and the branch head
    /// move, so the pointers never name an incomplete commit.
    pub fn commit(&self, message: &str) -> Result<CommitId> {
        let message = CommitMessage::try_parse(message)?;

        let branch = match self.refs().head_state()? {
            HeadState::Attached(branch) => branch,
            HeadState::Detached(_) => return Err(PitError::DetachedHeadCommit),
        };

        let index = {
            let mut index = self.index();

            // Load the index file from the disk
            index.rehydrate()?;
            index.entries().to_vec()
        };

        let parent = self.refs().read_head()?;
        let commit_id = self.database().generate_id();
        let commit = Commit::new(commit_id.clone(), parent, message, index);

        self.database().store(&commit, self.workspace())?;
        self.refs().update_head(&commit_id)?;
        self.refs().update_branch_head(&branch, &commit_id)?;

        tracing::info!(id = %commit_id, branch = %branch, files = commit.index().len(), "commit created");

        let is_root = if commit.is_root() { "(root-commit) " } else { "" };
        self.println(format!(
            "[{} {}{}] {}",
            branch,
            is_root,
            commit_id.to_short_id(),
            commit.short_message()
        ))?;

        Ok(commit_id)
    }
}
