use crate::areas::repository::Repository;
use crate::errors::RepositoryError;

impl Repository {
    /// Unstage a pending addition and, for a tracked file, stage its removal
    /// and delete it from the working directory
    pub fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        let path = self.workspace().normalize(path)?;
        let head = self.head_commit()?;
        let mut index = self.load_index()?;

        let is_staged = index.is_staged_for_addition(&path);
        let is_tracked = head.tracked_files().contains(&path);

        if !is_staged && !is_tracked {
            return Err(RepositoryError::NothingToRemove(path).into());
        }

        if is_tracked {
            index.stage_remove(path.clone());
        } else {
            index.unstage_addition(&path);
        }
        index.write_updates()?;

        if is_tracked {
            self.workspace().remove_file(&path)?;
        }
        tracing::debug!(path = %path.display(), is_tracked, "file removed from the next commit");

        Ok(())
    }
}
