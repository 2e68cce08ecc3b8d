use crate::areas::repository::Repository;
use crate::artifacts::branch::HeadState;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Result;
use colored::Colorize;
use std::collections::HashMap;

impl Repository {
    /// Print the history of the current head, newest first
    pub fn log(&self) -> Result<()> {
        let head_state = self.refs().head_state()?;
        let head = self.refs().read_head()?;
        let branch_heads = self.branch_heads()?;

        for commit in self.database().history(&head) {
            let commit = commit?;

            self.show_commit(&commit, &head_state, &head, &branch_heads)?;
            self.println("")?;
        }

        Ok(())
    }

    fn show_commit(
        &self,
        commit: &Commit,
        head_state: &HeadState,
        head: &CommitId,
        branch_heads: &HashMap<CommitId, Vec<BranchName>>,
    ) -> Result<()> {
        self.println(format!(
            "{}{}",
            format!("commit {}", commit.id()).yellow(),
            Self::commit_decoration(commit.id(), head_state, head, branch_heads)
        ))?;
        self.println("")?;
        for message_line in commit.message().as_ref().lines() {
            self.println(format!("    {}", message_line))?;
        }

        Ok(())
    }

    /// Branch names pointing at each commit, in creation order
    fn branch_heads(&self) -> Result<HashMap<CommitId, Vec<BranchName>>> {
        let mut branch_heads = HashMap::<CommitId, Vec<BranchName>>::new();

        for branch in self.refs().read_branches()? {
            let branch_head = self.refs().read_branch_head(&branch)?;
            branch_heads.entry(branch_head).or_default().push(branch);
        }

        Ok(branch_heads)
    }

    fn commit_decoration(
        commit_id: &CommitId,
        head_state: &HeadState,
        head: &CommitId,
        branch_heads: &HashMap<CommitId, Vec<BranchName>>,
    ) -> String {
        let branches = branch_heads
            .get(commit_id)
            .map(|branches| branches.as_slice())
            .unwrap_or_default();
        let mut names = Vec::new();

        if commit_id == head {
            match head_state {
                HeadState::Attached(current) => names.push(format!(
                    "{} {}",
                    "HEAD ->".cyan().bold(),
                    current.to_string().green().bold()
                )),
                HeadState::Detached(_) => names.push("HEAD".cyan().bold().to_string()),
            }
        }

        names.extend(
            branches
                .iter()
                .filter(|branch| head_state.branch() != Some(*branch) || commit_id != head)
                .map(|branch| branch.to_string().green().to_string()),
        );

        if names.is_empty() {
            String::new()
        } else {
            format!(" {}", format!("({})", names.join(", ")).yellow())
        }
    }
}
