//! Index entries and their text encoding
//!
//! The Index and each commit's index snapshot share one format: tracked file
//! names, one per line, in insertion order.

pub mod file_name;

use crate::artifacts::index::file_name::FileName;
use crate::errors::{PitError, Result};
use std::path::Path;

/// Largest accepted file name, in bytes
pub const FILE_NAME_MAX_LEN: usize = 511;
/// Tracked names never start with this character
pub const RESERVED_PREFIX: char = '.';

/// Parse a name list read from `source`
///
/// Blank lines are skipped. Invalid or duplicate names mean the record was
/// not written by us and are reported as corruption.
pub fn parse_entries(content: &str, source: &Path) -> Result<Vec<FileName>> {
    let mut entries: Vec<FileName> = Vec::new();

    for line in content.lines().filter(|line| !line.is_empty()) {
        let entry = FileName::try_parse(line)
            .map_err(|err| PitError::corrupt(source, err.to_string()))?;

        if entries.contains(&entry) {
            return Err(PitError::corrupt(
                source,
                format!("duplicate entry {}", entry),
            ));
        }
        entries.push(entry);
    }

    Ok(entries)
}

pub fn serialize_entries(entries: &[FileName]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\n", entry))
        .collect()
}
