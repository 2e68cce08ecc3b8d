//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application:
//! the pager adapter for long output and the temp-then-rename record writer
//! every storage area relies on.

use crate::errors::{IoContext, Result};
use derive_new::new;
use fake::rand;
use minus::Pager;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits. This allows
/// using the pager as a drop-in replacement for stdout in commands that produce
/// long output.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "Some long output...")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Name for a scratch file or directory inside the repository directory
///
/// Scratch names never look like a commit id or a fixed record name.
pub fn generate_temp_name(purpose: &str) -> String {
    format!("tmp-{}-{:08x}", purpose, rand::random::<u32>())
}

/// Replace the record at `path` with `content`
///
/// The content is written to a sibling temp file first and renamed over the
/// record, so readers see either the old or the new record, never a torn one.
pub fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = temp_sibling(path)?;

    let write_result = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(content)?;
            file.sync_all()
        })
        .io_context("write", &temp_path);

    if let Err(err) = write_result {
        discard_temp(&temp_path);
        return Err(err);
    }

    // rename the temp file over the record to make the update atomic
    if let Err(err) = std::fs::rename(&temp_path, path).io_context("replace", path) {
        discard_temp(&temp_path);
        return Err(err);
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "record written");
    Ok(())
}

fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let parent = path.parent().ok_or_else(|| {
        crate::errors::PitError::corrupt(path, "record path has no parent directory")
    })?;

    Ok(parent.join(generate_temp_name("record")))
}

fn discard_temp(temp_path: &Path) {
    if let Err(err) = std::fs::remove_file(temp_path)
        && err.kind() != io::ErrorKind::NotFound
    {
        tracing::warn!(path = %temp_path.display(), error = %err, "failed to remove temp record");
    }
}
