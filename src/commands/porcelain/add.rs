use crate::areas::repository::Repository;
use crate::artifacts::index::file_name::FileName;
use crate::errors::{PitError, Result};

impl Repository {
    /// Start tracking `file`, appending it to the end of the index
    pub fn add(&self, file: &str) -> Result<()> {
        let name = FileName::try_parse(file)?;

        if !self.workspace().is_regular_file(&name) {
            return Err(PitError::MissingFile {
                name: name.to_string(),
            });
        }

        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;
        index.add(name.clone())?;
        index.write_updates()?;

        tracing::debug!(file = %name, tracked = index.len(), "file added to index");
        Ok(())
    }
}
