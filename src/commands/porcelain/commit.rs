use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Record the staged changes on top of the current commit
    ///
    /// The new snapshot is the parent's tracked files, minus the pending
    /// removals, overlaid with the pending additions.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let mut index = self.load_index()?;

        if index.is_empty() {
            return Err(RepositoryError::NothingToCommit.into());
        }

        if message.trim().is_empty() {
            return Err(RepositoryError::EmptyMessage.into());
        }

        let parent = self.head_commit()?;
        let mut tracked_files = parent.tracked_files().clone();
        for path in index.removed() {
            tracked_files.remove(path);
        }
        for (path, oid) in index.added().iter() {
            tracked_files.insert(path.clone(), oid.clone());
        }

        let commit = Commit::create(
            message,
            Some(parent.oid().clone()),
            tracked_files,
            self.config().now(),
        )?;
        self.database().store(&commit)?;

        let branch = self.refs().current_branch()?;
        self.refs().update_branch(&branch, commit.oid())?;

        index.clear();
        index.write_updates()?;

        tracing::info!(commit = %commit.oid(), %branch, "commit created");
        writeln!(
            self.writer(),
            "[{} {}] {}",
            branch,
            commit.oid().to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
