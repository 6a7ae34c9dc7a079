use crate::areas::repository::Repository;
use crate::artifacts::log::LogRecord;
use crate::artifacts::log::rev_list::RevList;
use std::io::Write;

impl Repository {
    /// Print the active branch's commit and its ancestors, newest first
    pub fn log(&mut self) -> anyhow::Result<()> {
        let head = self.refs().read_head()?;

        for commit in RevList::new(self.database(), head) {
            let commit = commit?;
            write!(self.writer(), "{}", LogRecord::new(&commit))?;
        }

        Ok(())
    }

    /// History is a single chain without merges, so every commit reachable
    /// from a branch is printed the same way `log` prints it
    pub fn global_log(&mut self) -> anyhow::Result<()> {
        self.log()
    }
}
