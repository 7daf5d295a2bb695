pub mod blueprint;
pub mod common;
pub mod file_set;
pub mod manifest;

pub use crate::domain::DomainError;
pub use blueprint::{
    Blueprint, BlueprintBuilder, BlueprintKey, ContentBuilder, DependencyGroup, FileSpec,
    GroupEntry, PackageRequest, Section, SpecEntry,
};
pub use file_set::{ResolvedFile, ResolvedFileSet};
pub use manifest::{DependencyManifest, MANIFEST_PATH, ManifestEntry};
