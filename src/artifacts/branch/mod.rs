pub mod branch_name;

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\.\.|/|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
/// Longest accepted branch name, in bytes
pub const BRANCH_NAME_MAX_LEN: usize = 10;
/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";

/// Where the repository head is anchored
///
/// Exactly one of the two holds at any time: either a branch is current and
/// head follows it, or head points at an explicitly checked-out commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadState {
    Attached(BranchName),
    Detached(CommitId),
}

impl HeadState {
    pub fn is_detached(&self) -> bool {
        matches!(self, HeadState::Detached(_))
    }

    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            HeadState::Attached(branch) => Some(branch),
            HeadState::Detached(_) => None,
        }
    }
}

/// One line of the branch listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchListing {
    pub name: BranchName,
    pub active: bool,
}
