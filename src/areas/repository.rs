use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::status_info::Status;
use crate::artifacts::storage::ByteStore;
use crate::artifacts::storage::file_store::FileStore;
use crate::config::{Config, METADATA_DIR};
use crate::errors::RepositoryError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Handle over the four persisted areas of a repository
///
/// Every operation is an `impl Repository` block in `commands::porcelain`.
/// The areas share a single byte store, so the same operation logic runs over
/// the file system or over an in-memory store.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    config: Config,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`, backed by the file system
    pub fn new(path: &str, writer: Box<dyn std::io::Write>, config: Config) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("Unable to resolve repository path {path}"))?;
        let store = Rc::new(FileStore::new(path.clone().into_boxed_path()));

        Ok(Self::with_store(path.into_boxed_path(), store, writer, config))
    }

    pub fn with_store(
        path: Box<Path>,
        store: Rc<dyn ByteStore>,
        writer: Box<dyn std::io::Write>,
        config: Config,
    ) -> Self {
        let metadata_path = PathBuf::from(METADATA_DIR);

        let index = Index::new(store.clone(), metadata_path.join("index").into_boxed_path());
        let database = Database::new(store.clone(), metadata_path.join("objects").into_boxed_path());
        let refs = Refs::new(store.clone(), metadata_path.into_boxed_path());
        let workspace = Workspace::new(store);

        Repository {
            path,
            writer: RefCell::new(writer),
            config,
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    /// Borrow the staging index freshly loaded from the store
    pub fn load_index(&'_ self) -> anyhow::Result<RefMut<'_, Index>> {
        let mut index = self.index();
        index.rehydrate()?;

        Ok(index)
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn status_report(&'_ self) -> Status<'_> {
        Status::new(self)
    }

    pub fn is_initialized(&self) -> bool {
        self.refs.has_head()
    }

    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.is_initialized() {
            return Err(RepositoryError::NotInitialized.into());
        }

        Ok(())
    }

    /// The commit the active branch points at
    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        let oid = self.refs.read_head()?;

        self.database
            .parse_object_as_commit(&oid)?
            .with_context(|| format!("HEAD commit {oid} is missing"))
    }
}
