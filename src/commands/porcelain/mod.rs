//! Porcelain commands
//!
//! - `init`: create the repository with its initial commit
//! - `add`: stage a file for the next commit
//! - `commit`: record the staged changes as a new commit
//! - `rm`: unstage a file or stage its removal
//! - `log`: show the history of the active branch (`log`, `global-log`)
//! - `find`: list the commits carrying a message
//! - `status`: show branches, staged changes and working directory changes
//! - `checkout`: switch branches or restore a file
//! - `branch`: create and delete branches (`branch`, `rm-branch`)
//! - `reset`: move the active branch and the working directory to a commit

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod reset;
pub mod rm;
pub mod status;
