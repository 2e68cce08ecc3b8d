//! Index (staging area)
//!
//! The index is the ordered set of file names that will be snapshotted by the
//! next commit. Names keep their insertion order and never repeat.
//!
//! ## Index File Format
//!
//! `.pit/index` holds one tracked name per line. Every update rewrites the
//! whole file through a temp file and a rename, so a crash mid-write never
//! leaves a half-written index behind.

use crate::artifacts::core::write_atomically;
use crate::artifacts::index::file_name::FileName;
use crate::artifacts::index::{parse_entries, serialize_entries};
use crate::errors::{IoContext, PitError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.pit/index`)
    path: Box<Path>,
    /// Tracked names in insertion order
    entries: Vec<FileName>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing index file reads as an empty index.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries = if self.path.exists() {
            let content = std::fs::read_to_string(&self.path).io_context("read", &self.path)?;
            parse_entries(&content, &self.path)?
        } else {
            Vec::new()
        };
        self.changed = false;

        tracing::debug!(entries = self.entries.len(), "index loaded");
        Ok(())
    }

    pub fn contains(&self, name: &FileName) -> bool {
        self.entries.contains(name)
    }

    /// Append a name to the end of the index
    pub fn add(&mut self, name: FileName) -> Result<()> {
        if self.contains(&name) {
            return Err(PitError::AlreadyTracked {
                name: name.to_string(),
            });
        }

        self.entries.push(name);
        self.changed = true;

        Ok(())
    }

    /// Excise a name, keeping the order of the remaining entries
    pub fn remove(&mut self, name: &FileName) -> Result<()> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry == name)
            .ok_or_else(|| PitError::NotTracked {
                name: name.to_string(),
            })?;

        self.entries.remove(position);
        self.changed = true;

        Ok(())
    }

    /// Replace the whole index, as checkout does with a commit's snapshot
    pub fn replace(&mut self, entries: Vec<FileName>) {
        self.entries = entries;
        self.changed = true;
    }

    pub fn entries(&self) -> &[FileName] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn write_updates(&mut self) -> Result<()> {
        write_atomically(&self.path, serialize_entries(&self.entries).as_bytes())?;
        self.changed = false;

        Ok(())
    }
}
