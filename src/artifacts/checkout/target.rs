use crate::errors::RepositoryError;

/// What a checkout restores
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutTarget {
    /// Switch to another branch
    Branch(String),
    /// Restore one file from the current commit
    File(String),
    /// Restore one file from the given commit
    CommitFile { revision: String, file: String },
}

impl CheckoutTarget {
    /// Build a target from the operands given before and after the `--` separator
    pub fn from_operands(target: Option<String>, files: Vec<String>) -> anyhow::Result<Self> {
        let mut files = files.into_iter();

        match (target, files.next(), files.next()) {
            (Some(branch), None, None) => Ok(CheckoutTarget::Branch(branch)),
            (None, Some(file), None) => Ok(CheckoutTarget::File(file)),
            (Some(revision), Some(file), None) => Ok(CheckoutTarget::CommitFile { revision, file }),
            _ => Err(RepositoryError::IncorrectOperands.into()),
        }
    }
}
