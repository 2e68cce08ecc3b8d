use crate::areas::repository::Repository;
use crate::artifacts::branch::HeadState;
use crate::artifacts::index::file_name::FileName;
use crate::errors::Result;
use colored::Colorize;

// Terminology:
// - tracked files: files named by the index
// - missing files: tracked files that are gone from the working directory
// - untracked files: regular files at the root that the index does not name
impl Repository {
    /// Tracked names in index order
    pub fn tracked_files(&self) -> Result<Vec<FileName>> {
        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;

        Ok(index.entries().to_vec())
    }

    pub fn status(&self) -> Result<()> {
        match self.refs().head_state()? {
            HeadState::Attached(branch) => self.println(format!("On branch {}", branch))?,
            HeadState::Detached(id) => {
                self.println(format!("HEAD detached at {}", id.to_short_id()))?
            }
        }

        let tracked_files = self.tracked_files()?;
        self.println(format!("Tracked files ({}):", tracked_files.len()))?;

        for file in &tracked_files {
            if self.workspace().is_regular_file(file) {
                self.println(format!("\t{}", file.to_string().green()))?;
            } else {
                self.println(format!("\t{} {}", file.to_string().red(), "(missing)".red()))?;
            }
        }

        let untracked_files = self
            .workspace()
            .list_files()?
            .into_iter()
            .filter(|file| !tracked_files.contains(file))
            .collect::<Vec<_>>();

        if !untracked_files.is_empty() {
            self.println("Untracked files:")?;
            for file in &untracked_files {
                self.println(format!("\t{}", file.to_string().red()))?;
            }
        }

        Ok(())
    }
}
