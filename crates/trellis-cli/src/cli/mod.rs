//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use trellis_core::domain::{AnalyticsProvider, Platform, StateManagement};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "trellis",
    bin_name = "trellis",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Configuration-driven React and React Native project generator",
    long_about = "Trellis generates consistent React (Vite) and React Native (Expo) \
                  projects: every emitted file and every package.json entry comes \
                  from the same feature switches.",
    after_help = "EXAMPLES:\n\
        \x20 trellis new shop     --platform web    --state zustand --api --tests\n\
        \x20 trellis new pocket   --platform mobile --analytics --analytics-provider amplitude\n\
        \x20 trellis new --from trellis.toml\n\
        \x20 trellis list --format json\n\
        \x20 trellis completions bash > /usr/share/bash-completion/completions/trellis",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project.
    #[command(
        visible_alias = "n",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 trellis new shop   --platform web --state redux --persistence\n\
            \x20 trellis new pocket -p mobile -s mobx --localization --env --dry-run\n\
            \x20 trellis new --from ./trellis.toml --yes"
    )]
    New(NewArgs),

    /// List the built-in blueprints.
    #[command(
        visible_alias = "ls",
        about = "List available blueprints",
        after_help = "EXAMPLES:\n\
            \x20 trellis list\n\
            \x20 trellis list --platform mobile\n\
            \x20 trellis list --format csv"
    )]
    List(ListArgs),

    /// Initialise a Trellis configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 trellis init           # default location\n\
            \x20 trellis init --local   # ./.trellis.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 trellis completions bash > ~/.local/share/bash-completion/completions/trellis\n\
            \x20 trellis completions zsh  > ~/.zfunc/_trellis\n\
            \x20 trellis completions fish > ~/.config/fish/completions/trellis.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Trellis configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 trellis config get defaults.platform\n\
            \x20 trellis config list\n\
            \x20 trellis config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `trellis new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name. Optional when `--from` supplies one.
    #[arg(
        value_name = "NAME",
        required_unless_present = "from",
        help = "Project name (letters, digits, '-' and '_')"
    )]
    pub name: Option<String>,

    /// Target platform.
    #[arg(short = 'p', long = "platform", value_enum, help = "Target platform")]
    pub platform: Option<PlatformArg>,

    /// State management library.
    #[arg(short = 's', long = "state", value_enum, help = "State management library")]
    pub state: Option<StateArg>,

    #[command(flatten)]
    pub features: FeatureFlags,

    /// Read project answers from a definition file; flags still apply on top.
    #[arg(long = "from", value_name = "FILE", help = "Project definition file (trellis.toml)")]
    pub from: Option<PathBuf>,

    /// Directory to generate into.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: ./NAME)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Optional feature switches for `trellis new`.
#[derive(Debug, Default, Args)]
pub struct FeatureFlags {
    #[arg(long, help = "HTTP client and endpoint helpers (axios)")]
    pub api: bool,

    #[arg(long, help = "Persist the store to device/browser storage")]
    pub persistence: bool,

    #[arg(long, help = "Analytics facade")]
    pub analytics: bool,

    /// May be repeated; more than one distinct provider is rejected.
    #[arg(
        long = "analytics-provider",
        value_name = "PROVIDER",
        value_enum,
        action = clap::ArgAction::Append,
        help = "Analytics backend (default: firebase)"
    )]
    pub analytics_provider: Vec<ProviderArg>,

    #[arg(long, help = "Cursor pagination hook")]
    pub pagination: bool,

    #[arg(long, visible_alias = "a11y", help = "Accessibility helpers")]
    pub accessibility: bool,

    #[arg(long, visible_alias = "i18n", help = "i18next setup with en/es locales")]
    pub localization: bool,

    #[arg(long, help = "Typed environment configuration")]
    pub env: bool,

    #[arg(long, help = "Test runner setup and a first test")]
    pub tests: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `trellis list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by platform.
    #[arg(short = 'p', long = "platform", value_enum, help = "Filter by platform")]
    pub platform: Option<PlatformArg>,

    /// Filter by state library.
    #[arg(short = 's', long = "state", value_enum, help = "Filter by state library")]
    pub state: Option<StateArg>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `trellis init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.trellis.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `trellis completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `trellis config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.platform`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PlatformArg {
    /// React Native on Expo.
    #[value(alias = "native", alias = "expo")]
    Mobile,
    /// React on Vite.
    #[value(alias = "react", alias = "vite")]
    Web,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Mobile => Platform::Mobile,
            PlatformArg::Web => Platform::Web,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StateArg {
    /// Redux Toolkit.
    #[value(alias = "rtk")]
    Redux,
    Zustand,
    Mobx,
}

impl From<StateArg> for StateManagement {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Redux => StateManagement::Redux,
            StateArg::Zustand => StateManagement::Zustand,
            StateArg::Mobx => StateManagement::Mobx,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProviderArg {
    #[value(alias = "google")]
    Firebase,
    Amplitude,
    Mixpanel,
}

impl From<ProviderArg> for AnalyticsProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Firebase => AnalyticsProvider::Firebase,
            ProviderArg::Amplitude => AnalyticsProvider::Amplitude,
            ProviderArg::Mixpanel => AnalyticsProvider::Mixpanel,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
