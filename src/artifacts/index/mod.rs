//! Staging index file format
//!
//! ```text
//! Header (16 bytes):
//!   - Signature: "STGE" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Added entry count (4 bytes)
//!   - Removed entry count (4 bytes)
//!
//! Added entries:
//!   - Blob ID (20 bytes), path length (2 bytes), path
//!
//! Removed entries:
//!   - Path length (2 bytes), path
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! All integers are big endian.

pub mod checksum;
pub mod index_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 16;

/// Magic signature identifying staging files
pub const SIGNATURE: &str = "STGE";

/// Staging file format version
pub const VERSION: u32 = 1;
