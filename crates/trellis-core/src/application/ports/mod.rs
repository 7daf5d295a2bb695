//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `trellis-adapters` implement these.
//!
//! - `Filesystem`: file operations
//! - `BlueprintStore`: blueprint lookup
//! - `Emitter`: writing a validated plan

pub mod output;

pub use output::{BlueprintStore, Emitter, Filesystem};

#[cfg(test)]
pub use output::MockEmitter;
