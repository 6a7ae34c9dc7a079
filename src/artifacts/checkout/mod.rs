//! Checkout planning and safety checks
//!
//! - `target`: the three checkout modes and their operand shapes
//! - `conflict`: the untracked-file check run before the working directory is touched
//! - `migration`: the file writes and deletions that move the working directory
//!   from one commit to another
//!
//! Every check runs and every blob is loaded before the first write.

pub mod conflict;
pub mod migration;
pub mod target;
