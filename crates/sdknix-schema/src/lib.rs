//! Shared catalog types and wire format for sdknix.
//!
//! The catalog itself is produced by an external repository collaborator;
//! this crate only defines the shapes it arrives in, plus the two closed
//! classifications applied to it (platform tags, checksum algorithms).

pub mod checksum;
pub mod platform;
/// Catalog wire-format types.
pub mod types;

// Re-exports
pub use checksum::*;
pub use platform::*;
pub use types::*;
