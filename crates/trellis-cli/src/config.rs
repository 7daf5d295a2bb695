//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns it; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables, `TRELLIS__SECTION__KEY`
//! 3. The file named by `--config` / `TRELLIS_CONFIG`
//! 4. `./.trellis.toml`
//! 5. The user config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::ValueEnum as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;
use trellis_core::domain::{AnalyticsProvider, Platform, StateManagement};

use crate::cli::OutputFormat;

/// File name of a per-directory configuration.
pub const LOCAL_FILE: &str = ".trellis.toml";

/// Prefix of environment overrides.
const ENV_PREFIX: &str = "TRELLIS";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Answers used when `trellis new` is not told otherwise.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub platform: String,
    pub state: String,
    /// Backend picked when `--analytics` is given without a provider.
    pub analytics_provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                platform: Platform::Web.to_string(),
                state: StateManagement::Redux.to_string(),
                analytics_provider: AnalyticsProvider::DEFAULT.to_string(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `explicit` is the path given via `--config`; unlike the implicit
    /// locations it must exist.
    pub fn load(explicit: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut files = vec![
            (Self::config_path(), false),
            (PathBuf::from(LOCAL_FILE), false),
        ];
        if let Some(path) = explicit {
            files.push((path.clone(), true));
        }
        Self::load_layers(&files, Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    /// Layer `files` (lowest priority first) and `env` over the defaults.
    fn load_layers(files: &[(PathBuf, bool)], env: Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("defaults.platform", defaults.defaults.platform)?
            .set_default("defaults.state", defaults.defaults.state)?
            .set_default("defaults.analytics_provider", defaults.defaults.analytics_provider)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?;

        for (path, required) in files {
            debug!(path = %path.display(), required, "config layer");
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(*required),
            );
        }

        let config: Self = builder
            .add_source(env)
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.check()?;
        Ok(config)
    }

    /// Reject values that would only fail later, deep inside a command.
    fn check(&self) -> anyhow::Result<()> {
        self.platform()?;
        self.state()?;
        self.analytics_provider()?;
        self.output_format()?;
        Ok(())
    }

    /// Default platform.
    pub fn platform(&self) -> anyhow::Result<Platform> {
        self.defaults
            .platform
            .parse()
            .context("Invalid defaults.platform")
    }

    /// Default state library.
    pub fn state(&self) -> anyhow::Result<StateManagement> {
        self.defaults.state.parse().context("Invalid defaults.state")
    }

    /// Default analytics backend.
    pub fn analytics_provider(&self) -> anyhow::Result<AnalyticsProvider> {
        self.defaults
            .analytics_provider
            .parse()
            .context("Invalid defaults.analytics_provider")
    }

    /// Configured output format; `auto` unless the file says otherwise.
    pub fn output_format(&self) -> anyhow::Result<OutputFormat> {
        OutputFormat::from_str(&self.output.format, true)
            .map_err(|e| anyhow::anyhow!("Invalid output.format '{}': {e}", self.output.format))
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to [`LOCAL_FILE`] in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "trellis", "trellis")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_FILE))
    }

    /// The file that wins: `--config`, then `./.trellis.toml`, then the
    /// user file (which may not exist yet).
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        let local = PathBuf::from(LOCAL_FILE);
        if local.is_file() {
            local
        } else {
            Self::config_path()
        }
    }
}
