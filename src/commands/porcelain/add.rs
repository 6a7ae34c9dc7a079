use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::errors::RepositoryError;

impl Repository {
    /// Stage the current content of a working file
    ///
    /// Content identical to what the current commit tracks is not staged; any
    /// pending change for the path is dropped instead.
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        let path = self.workspace().normalize(path)?;
        let blob = self
            .workspace()
            .parse_blob(&path)?
            .ok_or_else(|| RepositoryError::FileNotFound(path.clone()))?;
        let oid = blob.object_id()?;

        let head = self.head_commit()?;
        let mut index = self.load_index()?;

        if head.tracked_files().get(&path) == Some(&oid) {
            index.unstage_removal(&path);
            index.unstage_addition(&path);
            tracing::debug!(path = %path.display(), "content matches the current commit");
        } else {
            self.database().store(&blob)?;
            tracing::debug!(path = %path.display(), %oid, "staged for addition");
            index.stage_add(path, oid);
        }

        index.write_updates()
    }
}
