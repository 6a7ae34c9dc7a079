use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Print the ID of every stored commit whose message is exactly `message`
    pub fn find(&mut self, message: &str) -> anyhow::Result<()> {
        let mut matches = self
            .database()
            .commits()?
            .into_iter()
            .filter(|commit| commit.message() == message)
            .map(|commit| commit.oid().clone())
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(RepositoryError::NoCommitWithMessage(message.to_string()).into());
        }

        matches.sort();
        for oid in matches {
            writeln!(self.writer(), "{oid}")?;
        }

        Ok(())
    }
}
