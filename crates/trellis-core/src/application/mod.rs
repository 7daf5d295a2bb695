//! Application layer for Trellis.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    BlueprintInfo, CatalogService, FilesystemEmitter, GenerationPlan, GenerationService,
};

pub use ports::{BlueprintStore, Emitter, Filesystem};

pub use error::ApplicationError;
