//! Command implementations
//!
//! Only porcelain commands exist: every user-facing workflow composes the
//! storage areas directly.

pub mod porcelain;
