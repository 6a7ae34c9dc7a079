use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::conflict::ensure_no_untracked_files;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::checkout::target::CheckoutTarget;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub fn checkout(&mut self, target: CheckoutTarget) -> anyhow::Result<()> {
        match target {
            CheckoutTarget::Branch(name) => self.checkout_branch(&name),
            CheckoutTarget::File(file) => {
                let head = self.head_commit()?;
                self.restore_file(&head, &file)
            }
            CheckoutTarget::CommitFile { revision, file } => {
                let commit = Revision::try_parse(&revision)?.resolve(self.database())?;
                self.restore_file(&commit, &file)
            }
        }
    }

    fn checkout_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(name.to_string())
            .map_err(|_| RepositoryError::BranchNotFound(name.to_string()))?;
        let target_oid = self
            .refs()
            .read_branch(&branch)?
            .ok_or_else(|| RepositoryError::BranchNotFound(name.to_string()))?;

        if self.refs().is_current_branch(&branch)? {
            return Err(RepositoryError::CheckoutCurrentBranch(name.to_string()).into());
        }

        let target = self
            .database()
            .parse_object_as_commit(&target_oid)?
            .with_context(|| format!("branch {branch} points at missing commit {target_oid}"))?;

        self.migrate_to(&target)?;
        self.refs().set_head(&branch)?;

        tracing::info!(%branch, commit = %target.oid(), "switched branch");
        writeln!(self.writer(), "Switched to branch '{branch}'")?;

        Ok(())
    }

    /// Move the working directory and the staging index from the current
    /// commit to `target`, refusing if untracked files are present
    pub(crate) fn migrate_to(&self, target: &Commit) -> anyhow::Result<()> {
        let current = self.head_commit()?;

        ensure_no_untracked_files(&Inspector::new(self))?;
        let migration = Migration::plan(self.database(), &current, target)?;

        let mut index = self.load_index()?;
        self.workspace().apply_migration(&migration)?;
        index.clear();
        index.write_updates()
    }

    fn restore_file(&self, commit: &Commit, file: &str) -> anyhow::Result<()> {
        let path = self.workspace().normalize(file)?;
        let oid = commit
            .tracked_files()
            .get(&path)
            .ok_or_else(|| RepositoryError::FileNotInCommit(path.clone()))?;

        let blob = self
            .database()
            .parse_object_as_blob(oid)?
            .with_context(|| format!("blob {oid} for {} is missing", path.display()))?;

        self.workspace().write_file(&path, blob.content())?;
        tracing::debug!(path = %path.display(), commit = %commit.oid(), "file restored");

        Ok(())
    }
}
