//! Commit object
//!
//! A commit is an immutable snapshot: a message, a timestamp, at most one parent
//! and the mapping of every tracked path to its blob. Its ID is the hash of its
//! serialized form, computed once when the commit is constructed.
//!
//! ## Format
//!
//! ```text
//! commit <size>\0
//! timestamp <timestamp>
//! parent <parent-sha>            (absent for the initial commit)
//! file <blob-sha> <path>         (one per tracked file, in insertion order)
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::path_key;
use crate::artifacts::objects::tracked_files::TrackedFiles;
use crate::config::{EPOCH_TIMESTAMP, INITIAL_COMMIT_MESSAGE, TIMESTAMP_FORMAT};
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    oid: ObjectId,
    message: String,
    timestamp: String,
    /// Weak back-reference to the previous commit, by ID
    parent: Option<ObjectId>,
    tracked_files: TrackedFiles,
}

impl Commit {
    /// Build a commit from its logical fields and compute its ID
    pub fn new(
        message: String,
        timestamp: String,
        parent: Option<ObjectId>,
        tracked_files: TrackedFiles,
    ) -> anyhow::Result<Self> {
        let mut commit = Commit {
            oid: ObjectId::default(),
            message,
            timestamp,
            parent,
            tracked_files,
        };
        commit.oid = ObjectId::hash(&commit.serialize()?);

        Ok(commit)
    }

    /// Create a commit stamped with `now`
    ///
    /// A commit carrying the initial commit message always gets the epoch
    /// timestamp, whatever the current time is.
    pub fn create(
        message: &str,
        parent: Option<ObjectId>,
        tracked_files: TrackedFiles,
        now: DateTime<FixedOffset>,
    ) -> anyhow::Result<Self> {
        let timestamp = if message == INITIAL_COMMIT_MESSAGE {
            EPOCH_TIMESTAMP.to_string()
        } else {
            now.format(TIMESTAMP_FORMAT).to_string()
        };

        Self::new(message.to_string(), timestamp, parent, tracked_files)
    }

    /// The root commit written by `init`
    pub fn initial() -> anyhow::Result<Self> {
        Self::new(
            INITIAL_COMMIT_MESSAGE.to_string(),
            EPOCH_TIMESTAMP.to_string(),
            None,
            TrackedFiles::new(),
        )
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn tracked_files(&self) -> &TrackedFiles {
        &self.tracked_files
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut lines = vec![format!("timestamp {}", self.timestamp)];
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        for (path, oid) in self.tracked_files.iter() {
            let key = path_key(path);
            if path.to_str().is_none() || key.contains('\n') {
                anyhow::bail!("Path cannot be recorded in a commit: {path:?}");
            }
            lines.push(format!("file {oid} {key}"));
        }
        lines.push(String::new());
        lines.push(self.message.clone());

        frame(self.object_type(), lines.join("\n").as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: content is not UTF-8")?;

        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;
        let mut lines = header.lines();

        let timestamp = lines
            .next()
            .and_then(|line| line.strip_prefix("timestamp "))
            .context("Invalid commit object: missing timestamp line")?
            .to_string();

        let mut parent = None;
        let mut tracked_files = TrackedFiles::new();
        for line in lines {
            if let Some(parent_oid) = line.strip_prefix("parent ") {
                parent = Some(ObjectId::try_parse(parent_oid.to_string())?);
            } else if let Some(entry) = line.strip_prefix("file ") {
                let (oid, path) = entry
                    .split_once(' ')
                    .context("Invalid commit object: invalid file line")?;
                tracked_files.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
            } else {
                anyhow::bail!("Invalid commit object: unexpected line {line:?}");
            }
        }

        Self::new(message.to_string(), timestamp, parent, tracked_files)
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        Ok(self.oid.clone())
    }
}
