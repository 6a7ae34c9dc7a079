//! Content store
//!
//! Maps object IDs to immutable framed objects (blobs and commits). Objects are
//! keyed by the SHA-1 of their bytes, so writes are idempotent and the store only
//! ever grows. Reads verify that the stored bytes still hash to the requested ID.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::storage::ByteStore;
use anyhow::Context;
use bytes::Bytes;
use std::io::Cursor;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug)]
pub struct Database {
    store: Rc<dyn ByteStore>,
    /// Key prefix of the object directory (typically `.gitlet/objects`)
    path: Box<Path>,
}

impl Database {
    pub fn new(store: Rc<dyn ByteStore>, path: Box<Path>) -> Self {
        Database { store, path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store raw object bytes and return their ID
    ///
    /// Storing bytes that are already present is a no-op.
    pub fn put(&self, data: Bytes) -> anyhow::Result<ObjectId> {
        let oid = ObjectId::hash(&data);
        let object_path = self.path.join(oid.to_path());

        // write the object unless it already exists
        if !self.store.exists(&object_path) {
            self.store
                .write(&object_path, &data)
                .with_context(|| format!("Unable to write object {oid}"))?;
            tracing::debug!(%oid, size = data.len(), "stored object");
        }

        Ok(oid)
    }

    /// Load the raw bytes of an object, or `None` if it is not in the store
    pub fn get(&self, object_id: &ObjectId) -> anyhow::Result<Option<Bytes>> {
        let object_path = self.path.join(object_id.to_path());

        let Some(content) = self
            .store
            .read(&object_path)
            .with_context(|| format!("Unable to read object {object_id}"))?
        else {
            return Ok(None);
        };

        if ObjectId::hash(&content) != *object_id {
            anyhow::bail!("Object {object_id} is corrupt: content does not match its id");
        }

        Ok(Some(content))
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.store.exists(&self.path.join(object_id.to_path()))
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        self.put(object.serialize()?)
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Option<Blob>> {
        match self.parse_object_as_bytes(object_id)? {
            Some((ObjectType::Blob, reader)) => Ok(Some(Blob::deserialize(reader)?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        match self.parse_object_as_bytes(object_id)? {
            Some((ObjectType::Commit, reader)) => Ok(Some(
                Commit::deserialize(reader)
                    .with_context(|| format!("Unable to parse commit {object_id}"))?,
            )),
            _ => Ok(None),
        }
    }

    pub fn object_type(&self, object_id: &ObjectId) -> anyhow::Result<Option<ObjectType>> {
        Ok(self
            .parse_object_as_bytes(object_id)?
            .map(|(object_type, _)| object_type))
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<Option<(ObjectType, Cursor<Bytes>)>> {
        let Some(content) = self.get(object_id)? else {
            return Ok(None);
        };

        let total_size = content.len();
        let mut object_reader = Cursor::new(content);
        let (object_type, size) = ObjectType::parse_header(&mut object_reader)?;

        if object_reader.position() as usize + size != total_size {
            anyhow::bail!("Object {object_id} is corrupt: size does not match its header");
        }

        Ok(Some((object_type, object_reader)))
    }

    /// IDs of every object in the store, sorted
    pub fn list_objects(&self) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self
            .store
            .list(&self.path)?
            .into_iter()
            .filter_map(|key| {
                let relative = key.strip_prefix(&self.path).ok()?;
                let dir = relative.parent()?.to_str()?;
                let file = relative.file_name()?.to_str()?;

                // skips leftovers that are not objects, such as temp files
                ObjectId::try_parse(format!("{dir}{file}")).ok()
            })
            .collect())
    }

    /// Find all objects whose ID starts with the given prefix
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self
            .list_objects()?
            .into_iter()
            .filter(|oid| oid.starts_with(prefix))
            .collect())
    }

    /// Every commit in the store, in ID order
    pub fn commits(&self) -> anyhow::Result<Vec<Commit>> {
        self.list_objects()?
            .iter()
            .filter_map(|oid| self.parse_object_as_commit(oid).transpose())
            .collect()
    }
}
