use crate::areas::repository::Repository;
use std::io::Write;

// Terminology:
// - staged files: pending additions in the staging index
// - removed files: pending removals in the staging index
// - modified/deleted files: tracked by the current commit or staged, but whose
//   working copy differs from the recorded content or is missing
// - untracked files: working files whose content the content store does not
//   know under their name, and which are neither tracked nor staged
impl Repository {
    pub fn status(&mut self) -> anyhow::Result<()> {
        let index = self.load_index()?;
        let status = self.status_report().initialize(&index)?;

        write!(self.writer(), "{status}")?;

        Ok(())
    }
}
