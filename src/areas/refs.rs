//! Branch table and HEAD
//!
//! Branches are named pointers to commits, stored as `refs/heads/<name>` files
//! holding a 40-character commit ID. HEAD never points at a commit directly: it
//! is a symbolic reference (`ref: refs/heads/<name>`) naming the active branch,
//! and resolving the current commit goes HEAD → branch → commit.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::storage::ByteStore;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::path::Path;
use std::rc::Rc;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug)]
pub struct Refs {
    store: Rc<dyn ByteStore>,
    /// Key prefix of the metadata directory (typically `.gitlet`)
    path: Box<Path>,
}

impl Refs {
    pub fn new(store: Rc<dyn ByteStore>, path: Box<Path>) -> Self {
        Refs { store, path }
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    fn branch_path(&self, name: &BranchName) -> Box<Path> {
        self.heads_path().join(name.as_ref()).into_boxed_path()
    }

    pub fn has_head(&self) -> bool {
        self.store.exists(&self.head_path())
    }

    /// Name of the active branch
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        let content = self
            .store
            .read(&self.head_path())?
            .ok_or(RepositoryError::NotInitialized)?;
        let content = String::from_utf8(content.to_vec()).context("HEAD is not valid UTF-8")?;

        BranchName::try_parse_symref(&content)
    }

    pub fn is_current_branch(&self, name: &BranchName) -> anyhow::Result<bool> {
        Ok(&self.current_branch()? == name)
    }

    /// Point HEAD at `name`
    pub fn set_head(&self, name: &BranchName) -> anyhow::Result<()> {
        self.store
            .write(&self.head_path(), name.to_symref().as_bytes())
            .context("Unable to update HEAD")?;
        tracing::debug!(branch = %name, "HEAD updated");

        Ok(())
    }

    /// Commit the active branch points at
    pub fn read_head(&self) -> anyhow::Result<ObjectId> {
        let current_branch = self.current_branch()?;

        self.read_branch(&current_branch)?
            .with_context(|| format!("HEAD names missing branch {current_branch}"))
    }

    pub fn read_branch(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let Some(content) = self.store.read(&self.branch_path(name))? else {
            return Ok(None);
        };
        let content = String::from_utf8(content.to_vec())
            .with_context(|| format!("branch {name} is not valid UTF-8"))?;

        Ok(Some(ObjectId::try_parse(content.trim().to_string()).with_context(
            || format!("branch {name} does not hold a commit id"),
        )?))
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.store.exists(&self.branch_path(name))
    }

    /// Move an existing or new branch to `oid`
    pub fn update_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.store
            .write(&self.branch_path(name), oid.as_ref().as_bytes())
            .with_context(|| format!("Unable to update branch {name}"))?;
        tracing::debug!(branch = %name, %oid, "branch moved");

        Ok(())
    }

    pub fn create_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        // check whether another branch with the same name already exists
        if self.branch_exists(name) {
            return Err(RepositoryError::BranchExists(name.to_string()).into());
        }

        self.update_branch(name, oid)
    }

    /// Delete a branch pointer, returning the commit it pointed at
    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<ObjectId> {
        let oid = self
            .read_branch(name)?
            .ok_or_else(|| RepositoryError::BranchDoesNotExist(name.to_string()))?;

        self.store
            .delete(&self.branch_path(name))
            .with_context(|| format!("failed to delete branch {name}"))?;
        tracing::debug!(branch = %name, %oid, "branch deleted");

        Ok(oid)
    }

    /// All branch names, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = self
            .store
            .list(&heads_path)?
            .into_iter()
            .filter_map(|key| {
                let relative = key.strip_prefix(&heads_path).ok()?;
                let name = relative
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");

                // skips leftovers that are not branches, such as temp files
                BranchName::try_parse(name).ok()
            })
            .filter(|name| self.read_branch(name).is_ok_and(|oid| oid.is_some()))
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }
}
