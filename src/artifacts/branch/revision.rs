//! Commit revisions
//!
//! A revision is a full commit ID or an abbreviation of one. Abbreviations must
//! be unique among commit objects: a prefix shared by several commits is
//! rejected as ambiguous instead of picking one of them.

use crate::areas::database::Database;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(String);

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Self> {
        let revision = revision.trim();

        if revision.is_empty()
            || revision.len() > OBJECT_ID_LENGTH
            || !ObjectId::is_hex(revision)
        {
            return Err(RepositoryError::CommitNotFound(revision.to_string()).into());
        }

        Ok(Self(revision.to_ascii_lowercase()))
    }

    /// Resolve the revision to the single commit it names
    pub fn resolve(&self, database: &Database) -> anyhow::Result<Commit> {
        let oid = self.resolve_oid(database)?;

        database
            .parse_object_as_commit(&oid)?
            .ok_or_else(|| RepositoryError::CommitNotFound(self.0.clone()).into())
    }

    fn resolve_oid(&self, database: &Database) -> anyhow::Result<ObjectId> {
        if self.0.len() == OBJECT_ID_LENGTH {
            return Ok(ObjectId::try_parse(self.0.clone())?);
        }

        let mut candidates = Vec::new();
        for oid in database.find_objects_by_prefix(&self.0)? {
            if database.object_type(&oid)? == Some(ObjectType::Commit) {
                candidates.push(oid);
            }
        }

        match candidates.len() {
            0 => Err(RepositoryError::CommitNotFound(self.0.clone()).into()),
            1 => Ok(candidates.remove(0)),
            _ => Err(RepositoryError::AmbiguousCommit {
                prefix: self.0.clone(),
                candidates: candidates.iter().map(|oid| oid.to_string()).collect(),
            }
            .into()),
        }
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
