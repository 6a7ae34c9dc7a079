use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::config::DEFAULT_BRANCH;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(RepositoryError::AlreadyInitialized.into());
        }

        let commit = Commit::initial()?;
        self.database()
            .store(&commit)
            .context("Failed to store the initial commit")?;

        let branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs()
            .update_branch(&branch, commit.oid())
            .context("Failed to create the default branch")?;
        self.refs()
            .set_head(&branch)
            .context("Failed to create initial HEAD reference")?;

        {
            let mut index = self.index();
            index.clear();
            index
                .write_updates()
                .context("Failed to create the staging index")?;
        }

        tracing::info!(commit = %commit.oid(), branch = %branch, "repository initialized");
        writeln!(
            self.writer(),
            "Initialized empty Gitlet repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
