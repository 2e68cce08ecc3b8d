use crate::areas::repository::Repository;
use crate::artifacts::index::file_name::FileName;
use crate::errors::Result;

impl Repository {
    /// Stop tracking `file`; the working copy is left alone
    pub fn rm(&self, file: &str) -> Result<()> {
        let name = FileName::try_parse(file)?;

        let mut index = self.index();
        index.rehydrate()?;
        index.remove(&name)?;
        index.write_updates()?;

        tracing::debug!(file = %name, tracked = index.len(), "file removed from index");
        Ok(())
    }
}
