use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Result;
use derive_new::new;

/// Lazy walk over a commit's ancestry, newest first
///
/// Commits are loaded one at a time as the walk advances. The walk ends at
/// the sentinel, or right after yielding the first error.
#[derive(Debug, new)]
pub struct RevList<'r> {
    database: &'r Database,
    current_commit_id: CommitId,
}

impl Iterator for RevList<'_> {
    type Item = Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_commit_id.is_sentinel() {
            return None;
        }

        match self.database.load(&self.current_commit_id) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_id = commit.parent().clone();
                Some(Ok(commit))
            }
            Err(err) => {
                // A broken link ends the walk
                self.current_commit_id = CommitId::sentinel();
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for RevList<'_> {}
