//! Staging index
//!
//! Records the changes that the next commit will apply on top of the current
//! one: pending additions (path → blob ID) and pending removals (paths). It is
//! persisted between invocations and cleared after every commit, branch
//! checkout and reset.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::path_key;
use crate::artifacts::objects::tracked_files::TrackedFiles;
use crate::artifacts::storage::ByteStore;
use anyhow::{Context, anyhow};
use byteorder::{ByteOrder, WriteBytesExt};
use std::collections::BTreeSet;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug)]
pub struct Index {
    store: Rc<dyn ByteStore>,
    /// Key of the staging file (typically `.gitlet/index`)
    path: Box<Path>,
    /// Pending additions, in staging order
    added: TrackedFiles,
    /// Pending removals
    removed: BTreeSet<PathBuf>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(store: Rc<dyn ByteStore>, path: Box<Path>) -> Self {
        Index {
            store,
            path,
            added: TrackedFiles::new(),
            removed: BTreeSet::new(),
            changed: false,
        }
    }

    /// Load the staging index from the store
    ///
    /// A missing or empty staging file yields an empty index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.added = TrackedFiles::new();
        self.removed = BTreeSet::new();
        self.changed = false;

        let content = match self.store.read(&self.path)? {
            Some(content) if !content.is_empty() => content,
            _ => return Ok(()),
        };

        let mut reader = Checksum::new(Cursor::new(content));
        let header = Self::parse_header(&mut reader)?;

        for _ in 0..header.added_count {
            let oid_bytes = reader.read(20)?;
            let oid = ObjectId::read_h40_from(&mut &oid_bytes[..])?;
            let path = Self::parse_path(&mut reader)?;
            self.added.insert(path, oid);
        }

        for _ in 0..header.removed_count {
            let path = Self::parse_path(&mut reader)?;
            self.removed.insert(path);
        }

        reader.verify().context("Staging index is corrupt")
    }

    fn parse_header(reader: &mut Checksum<Cursor<bytes::Bytes>>) -> anyhow::Result<IndexHeader> {
        let header = IndexHeader::parse(&reader.read(HEADER_SIZE)?)?;

        if header.marker != SIGNATURE {
            return Err(anyhow!("Invalid index file signature"));
        }

        if header.version != VERSION {
            return Err(anyhow!(
                "Unsupported index file version: {}",
                header.version
            ));
        }

        Ok(header)
    }

    fn parse_path(reader: &mut Checksum<Cursor<bytes::Bytes>>) -> anyhow::Result<PathBuf> {
        let length = byteorder::NetworkEndian::read_u16(&reader.read(2)?);
        let path = reader.read(length as usize)?;
        let path = String::from_utf8(path.to_vec()).context("Invalid path in index entry")?;

        Ok(PathBuf::from(path))
    }

    fn write_path(writer: &mut Checksum<Vec<u8>>, path: &Path) -> anyhow::Result<()> {
        let path = path_key(path);
        let length = u16::try_from(path.len())
            .with_context(|| format!("path is too long to be staged: {path}"))?;

        let mut entry = Vec::with_capacity(path.len() + 2);
        entry.write_u16::<byteorder::NetworkEndian>(length)?;
        entry.write_all(path.as_bytes())?;

        writer.write(&entry)
    }

    /// Persist the staging index if it changed since it was loaded
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let mut writer = Checksum::new(Vec::new());

        let header = IndexHeader {
            added_count: self.added.len() as u32,
            removed_count: self.removed.len() as u32,
            ..IndexHeader::empty()
        };
        writer.write(&header.serialize()?)?;

        for (path, oid) in self.added.iter() {
            let mut oid_bytes = Vec::with_capacity(20);
            oid.write_h40_to(&mut oid_bytes)?;
            writer.write(&oid_bytes)?;
            Self::write_path(&mut writer, path)?;
        }

        for path in &self.removed {
            Self::write_path(&mut writer, path)?;
        }

        writer.write_checksum()?;

        self.store
            .write(&self.path, &writer.into_inner())
            .context("Unable to write staging index")?;
        self.changed = false;
        tracing::debug!(
            added = self.added.len(),
            removed = self.removed.len(),
            "staging index written"
        );

        Ok(())
    }

    /// Stage `path` for addition, dropping any pending removal of it
    pub fn stage_add(&mut self, path: PathBuf, oid: ObjectId) {
        self.removed.remove(&path);
        self.added.insert(path, oid);
        self.changed = true;
    }

    /// Stage `path` for removal, dropping any pending addition of it
    pub fn stage_remove(&mut self, path: PathBuf) {
        self.added.remove(&path);
        self.removed.insert(path);
        self.changed = true;
    }

    /// Drop a pending addition, returning whether there was one
    pub fn unstage_addition(&mut self, path: &Path) -> bool {
        let found = self.added.remove(path).is_some();
        self.changed |= found;
        found
    }

    /// Drop a pending removal, returning whether there was one
    pub fn unstage_removal(&mut self, path: &Path) -> bool {
        let found = self.removed.remove(path);
        self.changed |= found;
        found
    }

    pub fn clear(&mut self) {
        self.added = TrackedFiles::new();
        self.removed.clear();
        self.changed = true;
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn added(&self) -> &TrackedFiles {
        &self.added
    }

    pub fn removed(&self) -> &BTreeSet<PathBuf> {
        &self.removed
    }

    pub fn is_staged_for_addition(&self, path: &Path) -> bool {
        self.added.contains(path)
    }

    pub fn is_staged_for_removal(&self, path: &Path) -> bool {
        self.removed.contains(path)
    }
}
