use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;

impl Repository {
    /// Move the active branch to `revision` and check out its snapshot
    pub fn reset(&mut self, revision: &str) -> anyhow::Result<()> {
        let target = Revision::try_parse(revision)?.resolve(self.database())?;
        let branch = self.refs().current_branch()?;

        self.migrate_to(&target)?;
        self.refs().update_branch(&branch, target.oid())?;
        tracing::info!(%branch, commit = %target.oid(), "branch reset");

        Ok(())
    }
}
