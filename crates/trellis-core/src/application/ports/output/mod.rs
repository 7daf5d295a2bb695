//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `trellis-adapters` crate provides implementations.

use std::path::Path;

use crate::application::services::GenerationPlan;
use crate::domain::{Blueprint, BlueprintKey};
use crate::error::TrellisResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `trellis_adapters::filesystem::LocalFilesystem` (production)
/// - `trellis_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> TrellisResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> TrellisResult<()>;

    /// Move a directory tree to `to`, which must not exist.
    fn rename(&self, from: &Path, to: &Path) -> TrellisResult<()>;
}

/// Port for blueprint lookup.
///
/// Implemented by `trellis_adapters::builtin::BuiltinStore`.
pub trait BlueprintStore: Send + Sync {
    /// The blueprint for `key`, or `DomainError::UnknownVariant`.
    fn get(&self, key: BlueprintKey) -> TrellisResult<Blueprint>;

    /// Every available blueprint, in a stable order.
    fn list(&self) -> TrellisResult<Vec<Blueprint>>;
}

/// Port for writing a validated plan somewhere.
#[cfg_attr(test, mockall::automock)]
pub trait Emitter: Send + Sync {
    /// Write every file of `plan`, plus `package.json`, under `root`.
    /// Either everything is written or nothing is left behind.
    fn write(&self, plan: &GenerationPlan, root: &Path) -> TrellisResult<()>;
}
