use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Compares working files against recorded blob IDs
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Blob ID the working file would be stored under, or `None` if it is absent
    pub fn workspace_oid(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        self.repository
            .workspace()
            .parse_blob(path)?
            .map(|blob| blob.object_id())
            .transpose()
    }

    /// Whether the content store already holds the working file under its name
    pub fn is_known(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(self
            .workspace_oid(path)?
            .is_some_and(|oid| self.repository.database().contains(&oid)))
    }

    /// Working files the content store does not recognize, sorted
    pub fn unknown_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut unknown = Vec::new();

        for path in self.repository.workspace().list_files()? {
            if !self.is_known(&path)? {
                unknown.push(path);
            }
        }

        Ok(unknown)
    }

    pub fn check_against_workspace(
        &self,
        path: &Path,
        expected: &ObjectId,
    ) -> anyhow::Result<Option<WorkspaceChangeType>> {
        match self.workspace_oid(path)? {
            None => Ok(Some(WorkspaceChangeType::Deleted)),
            Some(oid) if &oid != expected => Ok(Some(WorkspaceChangeType::Modified)),
            Some(_) => Ok(None),
        }
    }
}
