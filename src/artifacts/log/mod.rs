//! Commit history traversal and rendering
//!
//! - `rev_list`: walks a commit and its ancestors through parent links
//! - `LogRecord`: the per-commit block printed by `log` and `global-log`

use crate::artifacts::objects::commit::Commit;
use derive_new::new;
use std::fmt::{Display, Formatter};

pub mod rev_list;

#[derive(new)]
pub struct LogRecord<'c> {
    commit: &'c Commit,
}

impl Display for LogRecord<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===")?;
        writeln!(f, "commit {}", self.commit.oid())?;
        writeln!(f, "Date: {}", self.commit.timestamp())?;
        writeln!(f, "{}", self.commit.message())?;
        writeln!(f)
    }
}
