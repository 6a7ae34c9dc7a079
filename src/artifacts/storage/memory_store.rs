use crate::artifacts::storage::ByteStore;
use bytes::Bytes;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// In-memory byte store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<PathBuf, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ByteStore for MemoryStore {
    fn read(&self, key: &Path) -> anyhow::Result<Option<Bytes>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &Path, data: &[u8]) -> anyhow::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_path_buf(), Bytes::copy_from_slice(data));
        Ok(())
    }

    fn delete(&self, key: &Path) -> anyhow::Result<bool> {
        Ok(self.entries.borrow_mut().remove(key).is_some())
    }

    fn exists(&self, key: &Path) -> bool {
        self.entries.borrow().contains_key(key)
    }

    fn list(&self, prefix: &Path) -> anyhow::Result<Vec<PathBuf>> {
        Ok(self
            .entries
            .borrow()
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}
