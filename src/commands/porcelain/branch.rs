use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::RepositoryError;

impl Repository {
    /// Create a branch at the current commit without switching to it
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(name.to_string())?;
        let head = self.refs().read_head()?;

        self.refs().create_branch(&branch, &head)?;
        tracing::info!(%branch, commit = %head, "branch created");

        Ok(())
    }

    /// Delete a branch pointer; the commits it pointed at are kept
    pub fn rm_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let Ok(branch) = BranchName::try_parse(name.to_string()) else {
            return Err(RepositoryError::BranchDoesNotExist(name.to_string()).into());
        };

        if self.refs().is_current_branch(&branch)? {
            return Err(RepositoryError::RemoveCurrentBranch(name.to_string()).into());
        }

        let oid = self.refs().delete_branch(&branch)?;
        tracing::info!(%branch, commit = %oid, "branch deleted");

        Ok(())
    }
}
