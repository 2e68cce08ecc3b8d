//! Checkout state machine
//!
//! A checkout moves the head to a target commit and reconciles the index and
//! the working directory with it. The head ends up in one of two states:
//!
//! - Attached to a branch, when the checkout was driven by a branch
//!   switch or a branch creation (the latter leaves the content alone)
//! - Detached at the target, when the user checked out a raw commit id

pub mod migration;

use crate::artifacts::branch::branch_name::BranchName;

/// How a checkout was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutMode {
    /// A raw commit id given by the user, always detaches
    Explicit,
    /// Resolved from an existing branch, attaches to it
    Branch(BranchName),
    /// A branch just created at the current head; the content is already
    /// in place, so only the head state changes
    NewBranch(BranchName),
}

impl CheckoutMode {
    /// Branch the checkout attaches to, None when it detaches
    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            CheckoutMode::Explicit => None,
            CheckoutMode::Branch(branch) | CheckoutMode::NewBranch(branch) => Some(branch),
        }
    }

    /// Whether the working directory and the Index must be reconciled
    pub fn reconciles(&self) -> bool {
        !matches!(self, CheckoutMode::NewBranch(_))
    }
}
