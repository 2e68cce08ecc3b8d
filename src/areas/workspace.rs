use crate::artifacts::index::RESERVED_PREFIX;
use crate::artifacts::index::file_name::FileName;
use crate::errors::{IoContext, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Working directory file operations
///
/// Only flat names are handled: tracked files live directly under the
/// repository root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self, name: &FileName) -> PathBuf {
        self.path.join(name)
    }

    /// Whether `name` exists as a regular file (symlinks are followed)
    pub fn is_regular_file(&self, name: &FileName) -> bool {
        std::fs::metadata(self.file_path(name))
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }

    /// Copy the live bytes of `name` to `destination`
    pub fn copy_file_to(&self, name: &FileName, destination: &Path) -> Result<()> {
        let source = self.file_path(name);
        std::fs::copy(&source, destination).io_context("copy", &source)?;

        Ok(())
    }

    /// Delete a tracked file from the working directory
    ///
    /// Returns false if the file was already gone.
    pub fn remove_file(&self, name: &FileName) -> Result<bool> {
        let path = self.file_path(name);

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err).io_context("delete", &path),
        }
    }

    /// Move a staged copy into place as `name`
    pub fn restore_file(&self, staged: &Path, name: &FileName) -> Result<()> {
        let path = self.file_path(name);

        // the staged copy sits on the same filesystem, so this is a plain rename
        std::fs::rename(staged, &path).io_context("restore", &path)
    }

    /// Regular files at the repository root that could be tracked, in name order
    pub fn list_files(&self) -> Result<Vec<FileName>> {
        let files = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?;
                if name.starts_with(RESERVED_PREFIX) {
                    None
                } else {
                    FileName::try_parse(name).ok()
                }
            })
            .collect::<Vec<_>>();

        Ok(files)
    }
}
