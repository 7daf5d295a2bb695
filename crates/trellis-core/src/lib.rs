//! Trellis Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Trellis
//! React / React Native project generator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           trellis-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, CatalogService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (BlueprintStore, Filesystem, Emitter)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    trellis-adapters (Infrastructure)    │
//! │ (BuiltinStore, LocalFilesystem, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectConfig, resolver, assembler,    │
//! │  validator)                             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trellis_core::prelude::*;
//!
//! let config = ProjectConfig::builder()
//!     .name("shop")
//!     .platform(Platform::Web)
//!     .state(StateManagement::Zustand)
//!     .api(true)
//!     .build()?;
//!
//! let service = GenerationService::new(store, versions, emitter);
//! let plan = service.generate(&config, "./shop")?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Public API - what external crates should use.
pub mod prelude {
    pub use crate::application::{
        BlueprintInfo, CatalogService, FilesystemEmitter, GenerationPlan, GenerationService,
        ports::{BlueprintStore, Emitter, Filesystem},
    };
    pub use crate::domain::{
        Advisory, AnalyticsProvider, Blueprint, BlueprintKey, DependencyManifest, Feature,
        FeatureSet, Platform, ProjectConfig, ResolvedFileSet, StateManagement, VersionTable,
    };
    pub use crate::error::{TrellisError, TrellisResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
