//! A minimal local version-control core
//!
//! Tracks a set of working-directory files, freezes them into commits linked
//! by parent ids, and switches between named branches, restoring the working
//! directory to match.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::repository::Repository;
pub use errors::{ErrorKind, PitError, Result};
