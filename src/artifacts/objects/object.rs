use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{BufRead, Write};

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    /// Rebuild the value from a reader positioned right after the object header
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn object_id(&self) -> Result<ObjectId> {
        Ok(ObjectId::hash(&self.serialize()?))
    }
}

/// Prefix `payload` with the `<type> <size>\0` header
pub fn frame(object_type: ObjectType, payload: &[u8]) -> Result<Bytes> {
    let mut object_bytes = Vec::with_capacity(payload.len() + 16);
    let header = format!("{} {}\0", object_type.as_str(), payload.len());
    object_bytes.write_all(header.as_bytes())?;
    object_bytes.write_all(payload)?;

    Ok(Bytes::from(object_bytes))
}

impl ObjectId {
    /// SHA-1 of the given bytes
    pub fn hash(data: &[u8]) -> ObjectId {
        let mut hasher = Sha1::new();
        hasher.update(data);

        ObjectId::from_digest(hasher.finalize().as_slice())
    }
}
