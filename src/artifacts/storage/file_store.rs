use crate::artifacts::storage::ByteStore;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Byte store rooted at a directory on disk
#[derive(Debug)]
pub struct FileStore {
    root: Box<Path>,
}

impl FileStore {
    pub fn new(root: Box<Path>) -> Self {
        FileStore { root }
    }

    fn generate_temp_name() -> String {
        format!("tmp-{}", rand::random::<u32>())
    }

    // Removes empty directories between the deleted file and the store root.
    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.root.as_ref()
            && parent.starts_with(self.root.as_ref())
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("failed to remove empty directory at {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}

impl ByteStore for FileStore {
    fn read(&self, key: &Path) -> anyhow::Result<Option<Bytes>> {
        let path = self.root.join(key);
        if !path.is_file() {
            return Ok(None);
        }

        let content =
            std::fs::read(&path).with_context(|| format!("Unable to read file {}", path.display()))?;

        Ok(Some(Bytes::from(content)))
    }

    fn write(&self, key: &Path, data: &[u8]) -> anyhow::Result<()> {
        let path = self.root.join(key);
        let dir = path
            .parent()
            .with_context(|| format!("Invalid file path {}", path.display()))?;

        std::fs::create_dir_all(dir)
            .with_context(|| format!("Unable to create directory {}", dir.display()))?;

        // a directory standing where the file goes has to be cleared first
        if path.is_dir() {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("Unable to remove directory {}", path.display()))?;
        }

        let temp_path = dir.join(Self::generate_temp_name());
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Unable to open file {}", temp_path.display()))?;

        file.write_all(data)
            .with_context(|| format!("Unable to write file {}", temp_path.display()))?;
        file.sync_all()
            .with_context(|| format!("Unable to flush file {}", temp_path.display()))?;

        // rename the temp file over the destination to make the write atomic
        std::fs::rename(&temp_path, &path)
            .with_context(|| format!("Unable to rename file to {}", path.display()))?;

        Ok(())
    }

    fn delete(&self, key: &Path) -> anyhow::Result<bool> {
        let path = self.root.join(key);
        if !path.is_file() {
            return Ok(false);
        }

        std::fs::remove_file(&path)
            .with_context(|| format!("Unable to delete file {}", path.display()))?;
        self.prune_empty_parent_dirs(&path)?;

        Ok(true)
    }

    fn exists(&self, key: &Path) -> bool {
        self.root.join(key).is_file()
    }

    fn list(&self, prefix: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let dir = self.root.join(prefix);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut keys = WalkDir::new(&dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.root.as_ref())
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();
        keys.sort();

        Ok(keys)
    }
}
