//! Byte store abstraction
//!
//! Every persisted area of the repository (objects, refs, staging index) and the
//! working directory itself are read and written through a `ByteStore`: a flat
//! key-value store whose keys are relative paths.
//!
//! - `file_store`: backed by a directory on disk, with atomic writes
//! - `memory_store`: backed by an ordered map, used to exercise the repository
//!   logic without touching the file system

use bytes::Bytes;
use std::path::{Path, PathBuf};

pub mod file_store;
pub mod memory_store;

pub trait ByteStore: std::fmt::Debug {
    /// Read the bytes stored under `key`, or `None` if there is no such entry
    fn read(&self, key: &Path) -> anyhow::Result<Option<Bytes>>;

    /// Store `data` under `key`, replacing any previous value
    ///
    /// The write is durable once this returns.
    fn write(&self, key: &Path, data: &[u8]) -> anyhow::Result<()>;

    /// Delete the entry under `key`, returning whether it existed
    fn delete(&self, key: &Path) -> anyhow::Result<bool>;

    fn exists(&self, key: &Path) -> bool;

    /// List every entry under `prefix` (recursively), sorted
    ///
    /// An empty prefix lists the whole store. Keys are relative to the store root.
    fn list(&self, prefix: &Path) -> anyhow::Result<Vec<PathBuf>>;
}
