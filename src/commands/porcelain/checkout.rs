use crate::areas::repository::Repository;
use crate::artifacts::branch::HeadState;
use crate::artifacts::checkout::CheckoutMode;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::COMMIT_ID_LENGTH;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{PitError, Result};

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. You can look around and inspect files,
but commits are refused until you attach to a branch again.

If you want to keep working from here, create a branch with:

    pit checkout -b <new-branch-name>
"#;

impl Repository {
    /// Check out `target`, a raw commit id or a branch name
    ///
    /// Any argument as long as a commit id is taken as one.
    pub fn checkout(&self, target: &str) -> Result<()> {
        if target.len() != COMMIT_ID_LENGTH {
            return self.switch_to(target);
        }

        let commit_id = CommitId::try_parse(target)?;
        let previous_state = self.refs().head_state()?;
        self.checkout_commit(&commit_id, CheckoutMode::Explicit)?;

        self.print_detachment(&previous_state, target, &commit_id)
    }

    /// Move the head to `target` and reconcile the index and the working
    /// directory with it
    ///
    /// Everything the checkout needs is staged before the first visible
    /// change. The committed files are always restored, even when the
    /// target is the current head, except for a freshly created branch,
    /// which only moves pointers.
    pub fn checkout_commit(&self, target: &CommitId, mode: CheckoutMode) -> Result<()> {
        if !target.is_sentinel() && !self.database().exists(target) {
            return Err(PitError::CommitNotFound {
                id: target.to_string(),
            });
        }

        let migration = if mode.reconciles() {
            Some(Migration::plan(self, target)?)
        } else {
            None
        };

        self.refs().persist_current_head()?;
        self.refs().set_current_branch(mode.branch())?;

        if let Some(migration) = migration {
            migration.apply()?;
        }
        self.refs().update_head(target)?;

        tracing::info!(target = %target, mode = ?mode, "checkout complete");
        Ok(())
    }

    fn print_detachment(
        &self,
        previous_state: &HeadState,
        target: &str,
        target_id: &CommitId,
    ) -> Result<()> {
        match previous_state {
            HeadState::Attached(_) => {
                eprintln!("Note: checking out '{}'.\n{}", target, DETACHMENT_NOTICE);
            }
            HeadState::Detached(previous_id) if previous_id != target_id => {
                self.print_head_position("Previous HEAD position was", previous_id)?;
            }
            HeadState::Detached(_) => {}
        }

        self.print_head_position("HEAD is now at", target_id)
    }

    fn print_head_position(&self, message: &str, id: &CommitId) -> Result<()> {
        if id.is_sentinel() {
            eprintln!("{} {} (no commits)", message, id.to_short_id());
            return Ok(());
        }

        let commit = self.database().load(id)?;
        eprintln!("{} {} {}", message, id.to_short_id(), commit.short_message());

        Ok(())
    }
}
