//! Branch names and commit revisions
//!
//! - `branch_name`: validated branch names and the symbolic ref stored in HEAD
//! - `revision`: resolution of full or abbreviated commit IDs

pub mod branch_name;
pub mod revision;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Format of the HEAD file content
pub const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";
