use crate::artifacts::status::inspector::Inspector;
use crate::errors::RepositoryError;

/// Refuse to migrate while the working directory holds files the content
/// store does not know about, since the migration could clobber them
pub fn ensure_no_untracked_files(inspector: &Inspector) -> anyhow::Result<()> {
    let untracked = inspector.unknown_files()?;

    if !untracked.is_empty() {
        tracing::debug!(count = untracked.len(), "untracked files block the migration");
        return Err(RepositoryError::UntrackedFileInTheWay(untracked).into());
    }

    Ok(())
}
