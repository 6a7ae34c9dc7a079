//! Persisted areas of a repository
//!
//! - `database`: content store of blobs and commits
//! - `index`: staging index of pending additions and removals
//! - `refs`: branch table and HEAD
//! - `workspace`: the working directory
//! - `repository`: handle owning all of the above
//!
//! All areas read and write through one shared `ByteStore`.

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
