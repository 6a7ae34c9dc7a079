//! Repository error taxonomy
//!
//! Every user-facing failure of a repository operation is a `RepositoryError`.
//! Operations return `anyhow::Result`, so these errors travel through `anyhow`
//! and the binary recovers them with `downcast_ref` to decide how to report them.
//!
//! All of them are raised before the operation performs its first write, so the
//! repository is left exactly as it was.

use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a repository failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad command usage or missing operand
    UserError,
    /// Unknown branch, commit or path
    NotFound,
    /// The operation is not applicable in the current state
    PreconditionFailed,
    /// An untracked working file would be clobbered
    UnsafeOverwrite,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Please enter a command.")]
    NoCommand,
    #[error("No command with that name exists.")]
    UnknownCommand,
    #[error("Incorrect operands.")]
    IncorrectOperands,
    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,
    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),
    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,
    #[error("File does not exist.")]
    FileNotFound(PathBuf),
    #[error("File does not exist in that commit.")]
    FileNotInCommit(PathBuf),
    #[error("No commit with that id exists.")]
    CommitNotFound(String),
    #[error("Commit id {prefix} is ambiguous; candidates are: {}", .candidates.join(", "))]
    AmbiguousCommit {
        prefix: String,
        candidates: Vec<String>,
    },
    #[error("No such branch exists.")]
    BranchNotFound(String),
    #[error("A branch with that name does not exist.")]
    BranchDoesNotExist(String),
    #[error("Found no commit with that message.")]
    NoCommitWithMessage(String),
    #[error("A branch with that name already exists.")]
    BranchExists(String),
    #[error("Please enter a commit message.")]
    EmptyMessage,
    #[error("No changes added to the commit.")]
    NothingToCommit,
    #[error("No need to checkout the current branch.")]
    CheckoutCurrentBranch(String),
    #[error("No reason to remove the file.")]
    NothingToRemove(PathBuf),
    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch(String),
    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay(Vec<PathBuf>),
}

impl RepositoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::NoCommand
            | RepositoryError::UnknownCommand
            | RepositoryError::IncorrectOperands
            | RepositoryError::NotInitialized
            | RepositoryError::InvalidBranchName(_) => ErrorKind::UserError,
            RepositoryError::FileNotFound(_)
            | RepositoryError::FileNotInCommit(_)
            | RepositoryError::CommitNotFound(_)
            | RepositoryError::AmbiguousCommit { .. }
            | RepositoryError::BranchNotFound(_)
            | RepositoryError::BranchDoesNotExist(_)
            | RepositoryError::NoCommitWithMessage(_) => ErrorKind::NotFound,
            RepositoryError::AlreadyInitialized
            | RepositoryError::BranchExists(_)
            | RepositoryError::EmptyMessage
            | RepositoryError::NothingToCommit
            | RepositoryError::CheckoutCurrentBranch(_)
            | RepositoryError::NothingToRemove(_)
            | RepositoryError::RemoveCurrentBranch(_) => ErrorKind::PreconditionFailed,
            RepositoryError::UntrackedFileInTheWay(_) => ErrorKind::UnsafeOverwrite,
        }
    }

    /// Fatal failures terminate the process with a non-zero status instead of
    /// being reported as a regular outcome.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RepositoryError::RemoveCurrentBranch(_))
    }
}

/// Extract the repository error carried by an `anyhow` error, if any
pub fn repository_error(error: &anyhow::Error) -> Option<&RepositoryError> {
    error.downcast_ref::<RepositoryError>()
}
