use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;

/// Newest-first walk from a commit back to its root
#[derive(Clone, new)]
pub struct RevList<'r> {
    database: &'r Database,
    start: ObjectId,
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = anyhow::Result<Commit>;
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            database: self.database,
            current_commit_oid: Some(self.start),
        }
    }
}

#[derive(Clone)]
pub struct RevListIntoIter<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        let commit = self
            .database
            .parse_object_as_commit(&commit_oid)
            .and_then(|commit| commit.with_context(|| format!("commit {commit_oid} is missing")));

        // the walk ends at the root or at the first unreadable commit
        if let Ok(commit) = &commit {
            self.current_commit_oid = commit.parent().cloned();
        }

        Some(commit)
    }
}
