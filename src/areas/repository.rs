use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::errors::{IoContext, PitError, Result};
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

/// Name of the directory holding all repository state
pub const PIT_DIR: &str = ".pit";
/// Name of the index record inside `PIT_DIR`
pub const INDEX_FILE: &str = "index";

/// Handle on one repository
///
/// Holds the repository root and the storage areas beneath it. Every
/// operation goes through a handle, so nothing depends on the process's
/// current directory.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Create a handle for the repository rooted at `path`
    ///
    /// Nothing is read or created yet: `init` creates the directory, `open`
    /// returns a handle on an initialized repository.
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn Write>) -> Result<Self> {
        let path = path.as_ref();

        let path = if path.exists() {
            path.canonicalize().io_context("resolve", path)?
        } else {
            std::path::absolute(path).io_context("resolve", path)?
        };
        let pit_path = path.join(PIT_DIR);

        let index = Index::new(pit_path.join(INDEX_FILE).into_boxed_path());
        let database = Database::new(pit_path.clone().into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(pit_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        })
    }

    /// Create a handle and check that the repository is initialized
    pub fn open(path: impl AsRef<Path>, writer: Box<dyn Write>) -> Result<Self> {
        let repository = Self::new(path, writer)?;

        if !repository.is_initialized() {
            return Err(PitError::NotARepository {
                path: repository.path().to_path_buf(),
            });
        }

        Ok(repository)
    }

    pub fn is_initialized(&self) -> bool {
        self.pit_path().is_dir()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pit_path(&self) -> Box<Path> {
        self.path.join(PIT_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Write one line of command output
    pub fn println(&self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.writer(), "{}", line).map_err(PitError::Output)
    }
}
