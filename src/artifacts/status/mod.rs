//! Working directory status inspection
//!
//! - `file_change`: how a file differs from what is tracked or staged
//! - `inspector`: compares working files against commits and the content store
//! - `status_info`: the status report and its rendering

pub mod file_change;
pub mod inspector;
pub mod status_info;
