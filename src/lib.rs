//! A single-user, local version-control engine
//!
//! Snapshots of a working directory are recorded as a chain of immutable,
//! content-addressed commits. Branches are named pointers into that chain and
//! HEAD names the active branch.
//!
//! - `areas`: the persisted state (content store, staging index, refs, working directory)
//! - `artifacts`: value types and codecs shared by the areas
//! - `commands`: the repository operations
//! - `config`: environment-driven configuration
//! - `errors`: the user-facing error taxonomy

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
