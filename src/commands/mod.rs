//! Repository operations
//!
//! Each user-facing operation lives in `porcelain` as an `impl Repository`
//! block. Operations validate everything they need before their first write,
//! so a failed operation leaves the repository untouched.

pub mod porcelain;
