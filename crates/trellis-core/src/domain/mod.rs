//! Core domain layer for Trellis.
//!
//! Pure, synchronous generation logic. No filesystem or network access;
//! I/O is reached only through the ports of the application layer.
//!
//! ## Pipeline
//!
//! ```text
//! ProjectConfig ──► resolver ──► ResolvedFileSet ──┐
//!        │                                         ├──► validator ──► ValidationReport
//!        └────────► assembler ──► DependencyManifest ┘
//! ```
//!
//! Inclusion rules are the static [`predicates`]; blueprints and dependency
//! groups reference them by address, never by copy.
pub mod assembler;
pub mod config;
pub mod entities;
pub mod error;
pub mod predicates;
pub mod references;
pub mod resolver;
pub mod validator;
pub mod value_objects;
pub mod versions;

pub use assembler::{TableDefect, assemble, audit};
pub use config::{Feature, FeatureSet, ProjectConfig, ProjectConfigBuilder};
pub use entities::{
    Blueprint, BlueprintBuilder, BlueprintKey, ContentBuilder, DependencyGroup, DependencyManifest,
    FileSpec, GroupEntry, MANIFEST_PATH, ManifestEntry, PackageRequest, ResolvedFile,
    ResolvedFileSet, Section, SpecEntry,
};
pub use error::{DomainError, ErrorCategory};
pub use predicates::{EXCLUSIVE_FEATURES, ExclusiveSet, Predicate};
pub use resolver::resolve;
pub use validator::{Advisory, ValidationReport, validate};
pub use value_objects::{AnalyticsProvider, DependencyKind, Platform, StateManagement};
pub use versions::{PackageVersion, VersionRow, VersionTable};

#[cfg(test)]
mod tests {
    use super::*;
    use predicates::{ALWAYS, PERSISTENCE};

    fn app(c: &ProjectConfig) -> String {
        format!(
            "import {{ create }} from 'zustand';\nexport const title = '{}';\n",
            c.name()
        )
    }

    fn storage(_: &ProjectConfig) -> String {
        "import localforage from 'localforage';\nexport default localforage;\n".into()
    }

    fn broken(_: &ProjectConfig) -> String {
        "import { persist } from 'zustand/middleware';\nimport x from './missing';\n".into()
    }

    static CORE: Section = Section {
        name: "core",
        files: &[
            FileSpec::new("src/App.tsx", &ALWAYS, app),
            FileSpec::new("src/storage.ts", &PERSISTENCE, storage),
        ],
        groups: &[
            DependencyGroup {
                trigger: &ALWAYS,
                packages: &[PackageRequest::new("zustand")],
            },
            DependencyGroup {
                trigger: &PERSISTENCE,
                packages: &[PackageRequest::new("localforage")],
            },
        ],
    };

    static BROKEN: Section = Section {
        name: "broken",
        files: &[FileSpec::new("src/broken.ts", &PERSISTENCE, broken)],
        groups: &[],
    };

    fn versions() -> VersionTable {
        VersionTable::from_rows(&[
            ("zustand", "^4.5.2", DependencyKind::Runtime),
            ("localforage", "^1.10.0", DependencyKind::Runtime),
        ])
        .unwrap()
    }

    fn run(sections: &[&'static Section], persistence: bool) -> ValidationReport {
        let key = BlueprintKey::new(Platform::Web, StateManagement::Zustand);
        let mut builder = Blueprint::builder(key);
        for s in sections {
            builder = builder.section(s);
        }
        let blueprint = builder.build().unwrap();
        let config = ProjectConfig::builder()
            .name("demo")
            .platform(Platform::Web)
            .state(StateManagement::Zustand)
            .persistence(persistence)
            .build()
            .unwrap();

        let files = resolve(&blueprint, &config).unwrap();
        let manifest = assemble(&blueprint, &config, &versions()).unwrap();
        validate(&files, &manifest)
    }

    #[test]
    fn pipeline_is_consistent_with_and_without_feature() {
        assert!(run(&[&CORE], false).is_clean());
        assert!(run(&[&CORE], true).is_clean());
    }

    #[test]
    fn pipeline_reports_only_real_gaps() {
        let report = run(&[&CORE, &BROKEN], true);
        // zustand/middleware maps to the declared zustand package
        assert_eq!(
            report.errors,
            vec![DomainError::MissingReference {
                path: "src/broken.ts".into(),
                target: "./missing".into(),
            }]
        );
    }
}
