use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{BranchListing, HeadState};
use crate::artifacts::checkout::CheckoutMode;
use crate::errors::{PitError, Result};
use colored::Colorize;

impl Repository {
    /// Register a new branch at the current head and attach to it
    pub fn create_branch(&self, name: &str) -> Result<()> {
        let branch_name = BranchName::try_parse(name)?;

        if self.refs().lookup(&branch_name)?.is_some() {
            return Err(PitError::BranchExists {
                name: branch_name.to_string(),
            });
        }

        let head = self.refs().read_head()?;
        self.refs().register_branch(&branch_name, &head)?;
        self.checkout_commit(&head, CheckoutMode::NewBranch(branch_name.clone()))?;

        tracing::info!(branch = %branch_name, head = %head, "branch created");
        eprintln!("Switched to a new branch '{}'", branch_name);

        Ok(())
    }

    /// Attach to an existing branch and check out its stored head
    pub fn switch_to(&self, name: &str) -> Result<()> {
        let branch_name = BranchName::try_parse(name)?;

        if self.refs().lookup(&branch_name)?.is_none() {
            return Err(PitError::BranchNotFound {
                name: branch_name.to_string(),
            });
        }

        let previous_state = self.refs().head_state()?;
        // the current branch's slot may be stale if we are switching to ourselves
        self.refs().persist_current_head()?;
        let target = self.refs().read_branch_head(&branch_name)?;

        self.checkout_commit(&target, CheckoutMode::Branch(branch_name.clone()))?;

        if previous_state == HeadState::Attached(branch_name.clone()) {
            eprintln!("Already on '{}'", branch_name);
        } else {
            eprintln!("Switched to branch '{}'", branch_name);
        }

        Ok(())
    }

    /// Branches in creation order, the current one flagged as active
    pub fn list_branches(&self) -> Result<Vec<BranchListing>> {
        let current = self.refs().current_branch()?;

        Ok(self
            .refs()
            .read_branches()?
            .into_iter()
            .map(|name| BranchListing {
                active: current.as_ref() == Some(&name),
                name,
            })
            .collect())
    }

    /// Creation position of the branch called `name`
    pub fn lookup_branch(&self, name: &str) -> Result<Option<usize>> {
        let branch_name = BranchName::try_parse(name)?;
        self.refs().lookup(&branch_name)
    }

    pub fn branch(&self) -> Result<()> {
        for listing in self.list_branches()? {
            if listing.active {
                self.println(format!("* {}", listing.name.to_string().green()))?;
            } else {
                self.println(format!("  {}", listing.name))?;
            }
        }

        Ok(())
    }
}
