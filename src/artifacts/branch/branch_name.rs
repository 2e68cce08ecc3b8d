use crate::artifacts::branch::{BRANCH_NAME_MAX_LEN, DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::errors::{PitError, Result};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(PitError::InvalidBranchName {
                name,
                reason: "branch name cannot be empty".to_string(),
            });
        }

        if name.len() > BRANCH_NAME_MAX_LEN {
            return Err(PitError::InvalidBranchName {
                name,
                reason: format!("branch name exceeds {} bytes", BRANCH_NAME_MAX_LEN),
            });
        }

        if invalid_branch_name_regex().is_match(&name) {
            return Err(PitError::InvalidBranchName {
                name,
                reason: "branch name contains a forbidden sequence".to_string(),
            });
        }

        Ok(Self(name))
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

fn invalid_branch_name_regex() -> &'static regex::Regex {
    static REGEX: OnceLock<regex::Regex> = OnceLock::new();

    REGEX.get_or_init(|| {
        regex::Regex::new(INVALID_BRANCH_NAME_REGEX).expect("branch name regex is a valid pattern")
    })
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
