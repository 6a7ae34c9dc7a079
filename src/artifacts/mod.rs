//! Repository value types and codecs
//!
//! - `branch`: branch names, HEAD symref parsing and commit revisions
//! - `checkout`: checkout targets, untracked-file checks and migrations
//! - `index`: staging file header and checksum
//! - `log`: commit history traversal and log records
//! - `objects`: blobs, commits and their IDs
//! - `status`: working directory inspection and the status report
//! - `storage`: the byte store the repository is persisted in

pub mod branch;
pub mod checkout;
pub mod index;
pub mod log;
pub mod objects;
pub mod status;
pub mod storage;
