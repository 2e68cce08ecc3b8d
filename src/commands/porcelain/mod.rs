//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block built on the storage areas.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Start tracking a file
//! - `rm`: Stop tracking a file
//! - `commit`: Snapshot the tracked files
//! - `status`: Show the head state and the tracked files
//! - `log`: Show commit history
//! - `branch`: Create, list and switch branches
//! - `checkout`: Move to a commit or a branch

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod rm;
pub mod status;
