//! Core repository components
//!
//! This module contains the storage areas of a repository:
//!
//! - `database`: Commit store, one directory per commit
//! - `index`: Staging area holding the ordered set of tracked names
//! - `refs`: Head pointer, branch registry and current-branch marker
//! - `repository`: The handle tying the areas together
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
