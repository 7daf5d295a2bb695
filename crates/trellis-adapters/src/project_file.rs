//! Project definition files (`trellis.toml`).
//!
//! A definition file records the answers for one project so that it can be
//! regenerated without retyping flags.
//!
//! # Format
//!
//! ```toml
//! [project]
//! name     = "field-notes"   # optional when given on the command line
//! platform = "mobile"        # mobile | web
//! state    = "zustand"       # redux | zustand | mobx (default: redux)
//!
//! [features]
//! api                = true
//! persistence        = true
//! analytics          = true
//! analytics_provider = "amplitude"   # or a list; more than one is rejected
//! pagination         = false
//! accessibility      = false
//! localization       = false
//! env                = true
//! tests              = true
//! ```
//!
//! The file only carries raw answers. Every rule is applied by
//! [`ProjectConfig::builder`], so a file and the equivalent flags fail in
//! the same way.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::{debug, instrument};
use trellis_core::{
    application::ApplicationError,
    domain::{
        AnalyticsProvider, DomainError, Feature, Platform, ProjectConfig, ProjectConfigBuilder,
        StateManagement,
    },
    error::TrellisResult,
};

/// Conventional file name.
pub const FILE_NAME: &str = "trellis.toml";

// ── File types ────────────────────────────────────────────────────────────────

/// Deserialised representation of a `trellis.toml` file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    #[serde(default)]
    pub project: ProjectTable,
    #[serde(default)]
    pub features: FeatureTable,
}

/// `[project]`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectTable {
    pub name: Option<String>,
    pub platform: Option<String>,
    pub state: Option<String>,
}

/// `[features]`. Absent toggles are off.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FeatureTable {
    #[serde(default)]
    pub api: bool,
    #[serde(default)]
    pub persistence: bool,
    #[serde(default)]
    pub analytics: bool,
    pub analytics_provider: Option<ProviderField>,
    #[serde(default)]
    pub pagination: bool,
    #[serde(default)]
    pub accessibility: bool,
    #[serde(default)]
    pub localization: bool,
    #[serde(default)]
    pub env: bool,
    #[serde(default)]
    pub tests: bool,
}

/// `analytics_provider` as written: one name or several.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProviderField {
    One(String),
    Many(Vec<String>),
}

impl ProviderField {
    fn names(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl ProjectFile {
    /// Parse definition-file text. `origin` names the source in errors.
    pub fn parse(text: &str, origin: &str) -> Result<Self, DomainError> {
        toml::from_str(text).map_err(|e| {
            DomainError::invalid_config(format!("{origin}: {}", e.message()))
        })
    }

    /// Read and parse a definition file.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> TrellisResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("Failed to read project file: {e}"),
        })?;
        let file = Self::parse(&text, &path.display().to_string())?;
        debug!(?file, "loaded project file");
        Ok(file)
    }

    /// Platform named by the file, if any.
    pub fn platform(&self) -> Result<Option<Platform>, DomainError> {
        self.project.platform.as_deref().map(str::parse).transpose()
    }

    /// State library named by the file, if any.
    pub fn state(&self) -> Result<Option<StateManagement>, DomainError> {
        self.project.state.as_deref().map(str::parse).transpose()
    }

    /// Build a configuration from the file alone.
    ///
    /// Unparseable values are reported together with every rule violation
    /// the builder finds.
    pub fn to_config(&self) -> Result<ProjectConfig, DomainError> {
        let mut problems = Vec::new();

        let platform = match self.platform() {
            Ok(Some(platform)) => Some(platform),
            Ok(None) => {
                problems.push("[project] platform is required".to_string());
                None
            }
            Err(e) => {
                problems.extend(problems_of(e));
                None
            }
        };

        let mut builder = ProjectConfig::builder();
        if let Some(name) = &self.project.name {
            builder = builder.name(name.clone());
        }
        match self.state() {
            Ok(Some(state)) => builder = builder.state(state),
            Ok(None) => {}
            Err(e) => problems.extend(problems_of(e)),
        }
        let builder = match self.features.apply(builder) {
            Ok(builder) => builder,
            Err(e) => {
                problems.extend(problems_of(e));
                return Err(DomainError::ConfigValidation { problems });
            }
        };

        let Some(platform) = platform else {
            return Err(DomainError::ConfigValidation { problems });
        };
        match builder.platform(platform).build() {
            Ok(config) if problems.is_empty() => Ok(config),
            Ok(_) => Err(DomainError::ConfigValidation { problems }),
            Err(e) => {
                problems.extend(problems_of(e));
                Err(DomainError::ConfigValidation { problems })
            }
        }
    }
}

impl FeatureTable {
    /// Copy every toggle and provider onto `builder`.
    pub fn apply<P>(
        &self,
        builder: ProjectConfigBuilder<P>,
    ) -> Result<ProjectConfigBuilder<P>, DomainError> {
        let mut builder = builder
            .feature(Feature::Api, self.api)
            .feature(Feature::Persistence, self.persistence)
            .feature(Feature::Analytics, self.analytics)
            .feature(Feature::Pagination, self.pagination)
            .feature(Feature::Accessibility, self.accessibility)
            .feature(Feature::Localization, self.localization)
            .feature(Feature::Env, self.env)
            .feature(Feature::Tests, self.tests);

        let mut problems = Vec::new();
        for name in self.analytics_provider.iter().flat_map(ProviderField::names) {
            match name.parse::<AnalyticsProvider>() {
                Ok(provider) => builder = builder.analytics_provider(provider),
                Err(e) => problems.extend(problems_of(e)),
            }
        }

        if problems.is_empty() {
            Ok(builder)
        } else {
            Err(DomainError::ConfigValidation { problems })
        }
    }
}

fn problems_of(err: DomainError) -> Vec<String> {
    match err {
        DomainError::ConfigValidation { problems } => problems,
        other => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problems(err: DomainError) -> Vec<String> {
        problems_of(err)
    }

    #[test]
    fn full_file_builds_config() {
        let file = ProjectFile::parse(
            r#"
            [project]
            name = "field-notes"
            platform = "mobile"
            state = "zustand"

            [features]
            api = true
            analytics = true
            analytics_provider = "amplitude"
            tests = true
            "#,
            "trellis.toml",
        )
        .unwrap();
        let config = file.to_config().unwrap();
        assert_eq!(config.platform(), Platform::Mobile);
        assert_eq!(config.state(), StateManagement::Zustand);
        assert_eq!(config.features().analytics, Some(AnalyticsProvider::Amplitude));
        assert!(config.features().api && config.features().tests);
        assert!(!config.features().persistence);
    }

    #[test]
    fn provider_list_with_two_names_is_rejected() {
        let file = ProjectFile::parse(
            r#"
            [project]
            name = "app"
            platform = "web"
            [features]
            analytics = true
            analytics_provider = ["firebase", "mixpanel"]
            "#,
            "t",
        )
        .unwrap();
        let found = problems(file.to_config().unwrap_err());
        assert_eq!(found.len(), 1);
        assert!(found[0].contains("mutually exclusive"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ProjectFile::parse("[features]\ndark_mode = true\n", "defs.toml").unwrap_err();
        assert!(err.to_string().contains("defs.toml"));
        assert!(err.to_string().contains("dark_mode"));
    }

    #[test]
    fn all_problems_are_reported_together() {
        let file = ProjectFile::parse(
            r#"
            [project]
            name = "9lives"
            platform = "desktop"
            state = "recoil"
            [features]
            analytics_provider = "segment"
            "#,
            "t",
        )
        .unwrap();
        let found = problems(file.to_config().unwrap_err());
        assert_eq!(found.len(), 3, "{found:?}");
        assert!(found.iter().any(|p| p.contains("desktop")));
        assert!(found.iter().any(|p| p.contains("recoil")));
        assert!(found.iter().any(|p| p.contains("segment")));
    }

    #[test]
    fn provider_without_toggle_is_rejected() {
        let file = ProjectFile::parse(
            r#"
[project]
name = "a"
platform = "web"

[features]
analytics_provider = "mixpanel"
"#,
            "t",
        )
        .unwrap();
        let found = problems(file.to_config().unwrap_err());
        assert!(found[0].contains("requires analytics to be enabled"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "[project]\nname = \"disk\"\nplatform = \"web\"\n").unwrap();
        let config = ProjectFile::load(&path).unwrap().to_config().unwrap();
        assert_eq!(config.name(), "disk");
        assert_eq!(config.state(), StateManagement::Redux);
    }
}
