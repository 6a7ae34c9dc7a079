//! Working directory migration between two commits
//!
//! Used by branch checkout and reset. The migration is planned in full before
//! anything is touched: every blob of the target commit is loaded from the
//! content store up front, so a missing or corrupt object aborts the operation
//! while the working directory is still intact.
//!
//! - files tracked by the target commit are written (added or overwritten)
//! - files tracked by the current commit but not by the target are deleted

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::PathBuf;

/// Type of working directory action required by a migration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// File not tracked by the current commit
    Add,
    /// File tracked by both commits
    Modify,
}

#[derive(Debug, Default)]
pub struct Migration {
    writes: HashMap<ActionType, Vec<(PathBuf, Bytes)>>,
    deletions: Vec<PathBuf>,
}

impl Migration {
    pub fn plan(database: &Database, current: &Commit, target: &Commit) -> anyhow::Result<Self> {
        let mut migration = Migration::default();

        for (path, oid) in target.tracked_files().iter() {
            let blob = database
                .parse_object_as_blob(oid)?
                .with_context(|| format!("blob {oid} for {} is missing", path.display()))?;

            let action = if current.tracked_files().contains(path) {
                ActionType::Modify
            } else {
                ActionType::Add
            };

            migration
                .writes
                .entry(action)
                .or_default()
                .push((path.clone(), blob.content().clone()));
        }

        migration.deletions = current
            .tracked_files()
            .paths()
            .filter(|path| !target.tracked_files().contains(path))
            .cloned()
            .collect();

        tracing::debug!(
            from = %current.oid(),
            to = %target.oid(),
            writes = migration.write_count(),
            deletions = migration.deletions.len(),
            "planned migration"
        );

        Ok(migration)
    }

    pub fn writes(&self, action: &ActionType) -> &[(PathBuf, Bytes)] {
        self.writes.get(action).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.values().map(Vec::len).sum()
    }

    pub fn deletions(&self) -> &[PathBuf] {
        &self.deletions
    }
}
