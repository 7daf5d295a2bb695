//! Infrastructure adapters for Trellis.
//!
//! This crate implements the ports defined in `trellis-core::application::ports`
//! and ships the built-in catalog. It contains all I/O.

pub mod builtin;
pub mod filesystem;
pub mod project_file;

// Re-export commonly used adapters
pub use builtin::BuiltinStore;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use project_file::ProjectFile;
