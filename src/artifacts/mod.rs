//! Repository data structures and algorithms
//!
//! This module contains the value types and algorithms the storage areas and
//! commands are built from:
//!
//! - `branch`: Branch names, head state and branch listings
//! - `checkout`: Checkout modes and the migration planner
//! - `core`: Shared utilities (pager wrapper, atomic record writes)
//! - `index`: Tracked file names and their text encoding
//! - `log`: Commit history traversal
//! - `objects`: Commit records and identifiers

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod objects;
