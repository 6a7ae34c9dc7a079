//! Working directory
//!
//! Every key of the byte store outside the metadata directory is a working file.
//! Paths handed in by the user are normalized to store keys relative to the
//! repository root.

use crate::artifacts::checkout::migration::{ActionType, Migration};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::storage::ByteStore;
use crate::config::METADATA_DIR;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use std::rc::Rc;

const IGNORED_PATHS: [&str; 2] = [METADATA_DIR, ".git"];

/// Characters a tracked path may not contain; commits store one path per line
const FORBIDDEN_PATH_CHARS: [char; 2] = ['\n', '\0'];

#[derive(Debug)]
pub struct Workspace {
    store: Rc<dyn ByteStore>,
}

impl Workspace {
    pub fn new(store: Rc<dyn ByteStore>) -> Self {
        Workspace { store }
    }

    fn is_ignored(path: &Path) -> bool {
        match path.components().next() {
            Some(Component::Normal(name)) => {
                IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
            }
            _ => true,
        }
    }

    /// Whether `path` can be recorded in a commit and restored unchanged
    fn is_trackable(path: &Path) -> bool {
        path.components().all(|component| match component {
            Component::Normal(name) => name
                .to_str()
                .is_some_and(|name| !name.contains(FORBIDDEN_PATH_CHARS)),
            _ => false,
        })
    }

    /// Turn a user-supplied path into a working directory key
    ///
    /// Absolute paths, paths escaping the repository, paths pointing into the
    /// metadata directory and names that cannot be tracked name no working file.
    pub fn normalize(&self, path: &str) -> anyhow::Result<PathBuf> {
        let mut normalized = PathBuf::new();

        for component in Path::new(path).components() {
            match component {
                Component::CurDir => {}
                Component::Normal(name) => normalized.push(name),
                _ => return Err(RepositoryError::FileNotFound(PathBuf::from(path)).into()),
            }
        }

        if normalized.as_os_str().is_empty()
            || Self::is_ignored(&normalized)
            || !Self::is_trackable(&normalized)
        {
            return Err(RepositoryError::FileNotFound(PathBuf::from(path)).into());
        }

        Ok(normalized)
    }

    /// Every trackable working file, sorted
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(self
            .store
            .list(Path::new(""))?
            .into_iter()
            .filter(|path| !Self::is_ignored(path))
            .filter(|path| {
                let trackable = Self::is_trackable(path);
                if !trackable {
                    tracing::debug!(path = ?path, "skipping untrackable file name");
                }
                trackable
            })
            .collect())
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.store.exists(path)
    }

    pub fn read_file(&self, path: &Path) -> anyhow::Result<Option<Bytes>> {
        self.store
            .read(path)
            .with_context(|| format!("Unable to read working file {}", path.display()))
    }

    /// Snapshot a working file as a blob, or `None` if the file is absent
    pub fn parse_blob(&self, path: &Path) -> anyhow::Result<Option<Blob>> {
        Ok(self
            .read_file(path)?
            .map(|content| Blob::new(path.to_path_buf(), content)))
    }

    pub fn write_file(&self, path: &Path, content: &[u8]) -> anyhow::Result<()> {
        self.store
            .write(path, content)
            .with_context(|| format!("Unable to write working file {}", path.display()))?;
        tracing::trace!(path = %path.display(), size = content.len(), "working file written");

        Ok(())
    }

    pub fn remove_file(&self, path: &Path) -> anyhow::Result<bool> {
        let removed = self
            .store
            .delete(path)
            .with_context(|| format!("Unable to remove working file {}", path.display()))?;
        if removed {
            tracing::trace!(path = %path.display(), "working file removed");
        }

        Ok(removed)
    }

    // Deletions go first so that a stale file never shadows a written one.
    pub fn apply_migration(&self, migration: &Migration) -> anyhow::Result<()> {
        for path in migration.deletions() {
            self.remove_file(path)?;
        }

        for action in [ActionType::Modify, ActionType::Add] {
            for (path, content) in migration.writes(&action) {
                self.write_file(path, content)?;
            }
        }

        tracing::debug!(
            deleted = migration.deletions().len(),
            written = migration.write_count(),
            "working directory migrated"
        );

        Ok(())
    }
}
