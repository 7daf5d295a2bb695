//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "list blueprints".

pub mod catalog_service;
pub mod emitter;
pub mod generation_service;

pub use catalog_service::{BlueprintInfo, CatalogService};
pub use emitter::FilesystemEmitter;
pub use generation_service::{GenerationPlan, GenerationService};
