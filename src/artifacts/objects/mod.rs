//! Repository object types and operations
//!
//! Everything persisted in the content store is an object identified by the
//! SHA-1 of its framed serialization. There are two kinds:
//!
//! - **Blob**: the content of one file, stored together with the file name
//! - **Commit**: a snapshot (message, timestamp, parent, tracked files)
//!
//! All objects share the framing `<type> <size>\0<payload>`.

use std::path::{Component, Path};

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tracked_files;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Render a repository-relative path the way it is hashed and persisted
///
/// Components are joined with `/` regardless of the platform separator.
pub fn path_key(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
