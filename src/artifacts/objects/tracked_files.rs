//! Insertion-ordered mapping from file path to blob ID
//!
//! Commit IDs are hashed over this mapping, so iteration order has to be stable:
//! entries keep the position of their first insertion, and overwriting an entry
//! replaces its blob ID in place.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedFiles {
    entries: Vec<(PathBuf, ObjectId)>,
}

impl TrackedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|(entry, _)| entry == path)
    }

    /// Insert or overwrite an entry, returning the previous blob ID
    pub fn insert(&mut self, path: PathBuf, oid: ObjectId) -> Option<ObjectId> {
        match self.position(&path) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, oid)),
            None => {
                self.entries.push((path, oid));
                None
            }
        }
    }

    pub fn remove(&mut self, path: &Path) -> Option<ObjectId> {
        self.position(path)
            .map(|index| self.entries.remove(index).1)
    }

    pub fn get(&self, path: &Path) -> Option<&ObjectId> {
        self.position(path).map(|index| &self.entries[index].1)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.position(path).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &ObjectId)> {
        self.entries.iter().map(|(path, oid)| (path, oid))
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter().map(|(path, _)| path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(PathBuf, ObjectId)> for TrackedFiles {
    fn from_iter<I: IntoIterator<Item = (PathBuf, ObjectId)>>(iter: I) -> Self {
        let mut tracked_files = TrackedFiles::new();
        for (path, oid) in iter {
            tracked_files.insert(path, oid);
        }
        tracked_files
    }
}
