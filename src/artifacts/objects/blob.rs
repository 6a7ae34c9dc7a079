//! Blob object
//!
//! A blob is the content of one tracked file together with the file's name. The
//! name takes part in the hash, so identical contents stored under different
//! names get different IDs.
//!
//! ## Format
//!
//! `blob <size>\0<path>\0<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::path_key;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    /// Repository-relative path of the file
    path: PathBuf,
    content: Bytes,
}

impl Blob {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut payload = Vec::with_capacity(self.content.len() + 64);
        payload.write_all(path_key(&self.path).as_bytes())?;
        payload.write_all(b"\0")?;
        payload.write_all(&self.content)?;

        frame(self.object_type(), &payload)
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let mut path = Vec::new();
        reader.read_until(b'\0', &mut path)?;
        if path.pop() != Some(b'\0') {
            anyhow::bail!("Invalid blob object: missing path terminator");
        }
        let path = String::from_utf8(path).context("Invalid blob object: path is not UTF-8")?;

        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        Ok(Self::new(PathBuf::from(path), Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }
}
