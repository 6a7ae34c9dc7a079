use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) branches: Vec<BranchName>,
    pub(crate) current_branch: BranchName,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Collect the status report from persisted state, without changing it
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let refs = self.repository.refs();
        let head = self.repository.head_commit()?;
        let inspector = Inspector::new(self.repository);

        let staged_files = index.added().paths().cloned().collect::<FileSet>();
        let removed_files = index.removed().clone();

        // staged content takes precedence over the committed one
        let mut expected = head
            .tracked_files()
            .iter()
            .filter(|(path, _)| !index.is_staged_for_removal(path))
            .map(|(path, oid)| (path.clone(), oid.clone()))
            .collect::<BTreeMap<_, _>>();
        for (path, oid) in index.added().iter() {
            expected.insert(path.clone(), oid.clone());
        }

        let mut workspace_changeset = ChangeSet::new();
        for (path, oid) in &expected {
            if let Some(change) = inspector.check_against_workspace(path, oid)? {
                workspace_changeset.insert(path.clone(), change);
            }
        }

        let untracked_files = inspector
            .unknown_files()?
            .into_iter()
            .filter(|path| !expected.contains_key(path))
            .collect::<FileSet>();

        Ok(StatusInfo {
            branches: refs.list_branches()?,
            current_branch: refs.current_branch()?,
            staged_files,
            removed_files,
            workspace_changeset,
            untracked_files,
        })
    }
}

impl StatusInfo {
    fn write_section(
        f: &mut Formatter<'_>,
        title: &str,
        entries: impl Iterator<Item = String>,
    ) -> std::fmt::Result {
        writeln!(f, "=== {title} ===")?;
        for entry in entries {
            writeln!(f, "{entry}")?;
        }
        writeln!(f)
    }
}

impl Display for StatusInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Self::write_section(
            f,
            "Branches",
            self.branches.iter().map(|branch| {
                if branch == &self.current_branch {
                    format!("*{branch}")
                } else {
                    branch.to_string()
                }
            }),
        )?;
        Self::write_section(
            f,
            "Staged Files",
            self.staged_files.iter().map(|path| path.display().to_string()),
        )?;
        Self::write_section(
            f,
            "Removed Files",
            self.removed_files.iter().map(|path| path.display().to_string()),
        )?;
        Self::write_section(
            f,
            "Modifications Not Staged For Commit",
            self.workspace_changeset
                .iter()
                .map(|(path, change)| format!("{} {change}", path.display())),
        )?;
        Self::write_section(
            f,
            "Untracked Files",
            self.untracked_files.iter().map(|path| path.display().to_string()),
        )
    }
}
