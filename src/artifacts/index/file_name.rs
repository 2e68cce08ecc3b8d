use crate::artifacts::index::{FILE_NAME_MAX_LEN, RESERVED_PREFIX};
use crate::errors::{PitError, Result};

/// A name that may be tracked by the Index
///
/// Names are flat: they live directly in the working directory and inside
/// each commit entry, so path separators are rejected. The reserved prefix
/// keeps tracked names apart from `.pit` and from commit metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileName(String);

impl FileName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let reason = if name.is_empty() {
            Some("file name cannot be empty".to_string())
        } else if name.len() > FILE_NAME_MAX_LEN {
            Some(format!("file name exceeds {} bytes", FILE_NAME_MAX_LEN))
        } else if name.starts_with(RESERVED_PREFIX) {
            Some(format!("file name cannot start with '{}'", RESERVED_PREFIX))
        } else if name.contains(['/', '\\']) {
            Some("nested paths are not supported".to_string())
        } else if name.contains(['\0', '\n', '\r']) {
            Some("file name contains a control character".to_string())
        } else {
            None
        };

        match reason {
            Some(reason) => Err(PitError::InvalidFileName { name, reason }),
            None => Ok(Self(name)),
        }
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for FileName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
