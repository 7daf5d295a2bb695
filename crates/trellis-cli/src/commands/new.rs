//! Implementation of the `trellis new` command.
//!
//! Responsibility: merge flags, an optional definition file and the
//! configured defaults into a `ProjectConfig`, hand it to the generation
//! service, and report the result. No generation rules live here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use trellis_adapters::{BuiltinStore, LocalFilesystem, ProjectFile, builtin};
use trellis_core::{
    application::{FilesystemEmitter, GenerationPlan, GenerationService},
    domain::{Feature, Platform, ProjectConfig, StateManagement},
    error::TrellisError,
};

use crate::{
    cli::{FeatureFlags, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `trellis new` command.
///
/// 1. Load the definition file, if any
/// 2. Merge it with flags and defaults into a validated `ProjectConfig`
/// 3. Plan (resolve, assemble, validate) without writing
/// 4. Stop after printing the plan for `--dry-run`
/// 5. Confirm unless `--yes`
/// 6. Generate and print next steps
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("<from file>")))]
pub fn execute(
    args: NewArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let definition = args.from.as_deref().map(ProjectFile::load).transpose()?;
    let project = build_config(&args, definition.as_ref(), &config)?;
    let root = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(project.name()));

    debug!(config = %project, root = %root.display(), "Configuration resolved");

    let service = service(args.force)?;
    let plan = service.plan(&project)?;

    if args.dry_run {
        return show_dry_run(&plan, &root, &output);
    }

    if root.exists() && !args.force {
        return Err(CliError::ProjectExists { path: root });
    }

    if !output.is_quiet() && !args.yes && !output.is_json() {
        show_configuration(&plan, &root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    info!(project = %project.name(), path = %root.display(), "Generation started");
    let spinner = output.spinner(&format!("Writing {} files...", plan.files.len() + 1));
    let result = service.emit(&plan, &root);
    spinner.finish_and_clear();
    result?;

    report(&plan, &root, &output)
}

/// Generation service over the built-in catalog and the local disk.
fn service(replace_existing: bool) -> CliResult<GenerationService> {
    let store = BuiltinStore::with_builtin()?;
    let versions = builtin::canonical().map_err(TrellisError::from)?;
    let emitter = FilesystemEmitter::new(Box::new(LocalFilesystem::new()))
        .replace_existing(replace_existing);
    Ok(GenerationService::new(
        Box::new(store),
        versions,
        Box::new(emitter),
    ))
}

// ── Configuration merge ───────────────────────────────────────────────────────

/// Flags win over the definition file, which wins over [`AppConfig`].
///
/// Feature flags can only switch features on. Providers given as flags
/// replace the file's providers rather than adding to them.
pub fn build_config(
    args: &NewArgs,
    definition: Option<&ProjectFile>,
    config: &AppConfig,
) -> CliResult<ProjectConfig> {
    let name = args
        .name
        .clone()
        .or_else(|| definition.and_then(|d| d.project.name.clone()))
        .ok_or_else(|| CliError::InvalidInput {
            message: "a project name is required, either as NAME or in the definition file"
                .into(),
            source: None,
        })?;

    let (file_platform, file_state) = match definition {
        Some(d) => (
            d.platform().map_err(TrellisError::from)?,
            d.state().map_err(TrellisError::from)?,
        ),
        None => (None, None),
    };
    let platform = match args.platform.map(Platform::from).or(file_platform) {
        Some(platform) => platform,
        None => config.platform().map_err(config_error)?,
    };
    let state = match args.state.map(StateManagement::from).or(file_state) {
        Some(state) => state,
        None => config.state().map_err(config_error)?,
    };

    let mut builder = ProjectConfig::builder().name(name).platform(platform).state(state);

    if let Some(definition) = definition {
        let mut features = definition.features.clone();
        if !args.features.analytics_provider.is_empty() {
            features.analytics_provider = None;
        }
        builder = features.apply(builder).map_err(TrellisError::from)?;
    }

    for feature in enabled_flags(&args.features) {
        builder = builder.feature(feature, true);
    }
    for provider in &args.features.analytics_provider {
        builder = builder.analytics_provider((*provider).into());
    }

    let analytics_on =
        args.features.analytics || definition.is_some_and(|d| d.features.analytics);
    let provider_named = !args.features.analytics_provider.is_empty()
        || definition.is_some_and(|d| d.features.analytics_provider.is_some());
    if analytics_on && !provider_named {
        let fallback = config.analytics_provider().map_err(config_error)?;
        builder = builder.analytics_provider(fallback);
    }

    Ok(builder.build().map_err(TrellisError::from)?)
}

fn enabled_flags(flags: &FeatureFlags) -> Vec<Feature> {
    [
        (Feature::Api, flags.api),
        (Feature::Persistence, flags.persistence),
        (Feature::Analytics, flags.analytics),
        (Feature::Pagination, flags.pagination),
        (Feature::Accessibility, flags.accessibility),
        (Feature::Localization, flags.localization),
        (Feature::Env, flags.env),
        (Feature::Tests, flags.tests),
    ]
    .into_iter()
    .filter_map(|(feature, on)| on.then_some(feature))
    .collect()
}

fn config_error(err: anyhow::Error) -> CliError {
    CliError::ConfigError {
        message: format!("{err:#}"),
        source: None,
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

/// Machine-readable summary of a plan.
#[derive(Debug, Serialize)]
struct PlanSummary<'a> {
    root: &'a Path,
    config: &'a ProjectConfig,
    files: Vec<&'a str>,
    package_json: Value,
    advisories: Vec<String>,
}

impl<'a> PlanSummary<'a> {
    fn new(plan: &'a GenerationPlan, root: &'a Path) -> Self {
        Self {
            root,
            config: &plan.config,
            files: plan.outputs().into_iter().map(|(path, _)| path).collect(),
            package_json: plan.manifest.to_package_json(&plan.config),
            advisories: plan.advisories.iter().map(ToString::to_string).collect(),
        }
    }
}

fn show_dry_run(plan: &GenerationPlan, root: &Path, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&PlanSummary::new(plan, root))?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.config.name(),
        root.display()
    ))?;
    show_configuration(plan, root, output)?;

    output.header("Files")?;
    for (path, content) in plan.outputs() {
        output.print(&format!("  {path:<40} {:>6} bytes", content.len()))?;
    }
    output.print("")?;

    output.header("package.json")?;
    output.print(plan.package_json().trim_end())?;
    show_advisories(plan, output)
}

fn show_configuration(plan: &GenerationPlan, root: &Path, out: &OutputManager) -> CliResult<()> {
    let config = &plan.config;
    let enabled: Vec<String> = config
        .features()
        .enabled()
        .into_iter()
        .map(|feature| match (feature, config.features().analytics) {
            (Feature::Analytics, Some(provider)) => format!("analytics ({provider})"),
            _ => feature.to_string(),
        })
        .collect();

    out.header("Configuration")?;
    out.field("Project", config.name(), 10)?;
    out.field("Platform", config.platform().toolchain(), 10)?;
    out.field("State", config.state().display_name(), 10)?;
    out.field(
        "Features",
        &if enabled.is_empty() {
            "none".to_string()
        } else {
            enabled.join(", ")
        },
        10,
    )?;
    out.field(
        "Output",
        &format!(
            "{} ({} files, {} packages)",
            root.display(),
            plan.files.len() + 1,
            plan.manifest.len()
        ),
        10,
    )?;
    out.print("")?;
    Ok(())
}

fn show_advisories(plan: &GenerationPlan, output: &OutputManager) -> CliResult<()> {
    for advisory in &plan.advisories {
        output.warning(&advisory.to_string())?;
    }
    Ok(())
}

fn report(plan: &GenerationPlan, root: &Path, output: &OutputManager) -> CliResult<()> {
    info!(project = %plan.config.name(), "Generation completed");

    if output.is_json() {
        output.json(&PlanSummary::new(plan, root))?;
        return Ok(());
    }

    output.success(&format!(
        "Project '{}' created at {}",
        plan.config.name(),
        root.display()
    ))?;
    show_advisories(plan, output)?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", root.display()))?;
    output.print("  npm install")?;
    output.print(match plan.config.platform() {
        Platform::Mobile => "  npx expo start",
        Platform::Web => "  npm run dev",
    })?;
    Ok(())
}

// ── Confirmation ──────────────────────────────────────────────────────────────

fn confirm() -> CliResult<bool> {
    use std::io::IsTerminal;

    if std::io::stdin().is_terminal() {
        confirm_interactive()
    } else {
        confirm_line()
    }
}

#[cfg(feature = "interactive")]
fn confirm_interactive() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_interactive() -> CliResult<bool> {
    confirm_line()
}

/// `[Y/n]` prompt answered by one line of stdin.
fn confirm_line() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "" | "y" | "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use trellis_core::domain::AnalyticsProvider;

    use crate::cli::{Cli, Commands};

    fn args(argv: &[&str]) -> NewArgs {
        let mut full = vec!["trellis", "new"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::New(args) => args,
            other => panic!("expected new, got {other:?}"),
        }
    }

    fn file(text: &str) -> ProjectFile {
        ProjectFile::parse(text, "trellis.toml").unwrap()
    }

    #[test]
    fn defaults_fill_omitted_choices() {
        let mut config = AppConfig::default();
        config.defaults.platform = "mobile".into();
        config.defaults.state = "mobx".into();

        let project = build_config(&args(&["pocket"]), None, &config).unwrap();
        assert_eq!(project.platform(), Platform::Mobile);
        assert_eq!(project.state(), StateManagement::Mobx);
        assert!(project.features().enabled().is_empty());
    }

    #[test]
    fn flags_override_definition_file() {
        let definition = file(
            "[project]\nname = \"from-file\"\nplatform = \"mobile\"\nstate = \"zustand\"\n\
             [features]\napi = true\n",
        );
        let project = build_config(
            &args(&["shop", "--platform", "web", "--tests"]),
            Some(&definition),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(project.name(), "shop");
        assert_eq!(project.platform(), Platform::Web);
        assert_eq!(project.state(), StateManagement::Zustand);
        assert!(project.features().api && project.features().tests);
    }

    #[test]
    fn provider_flag_replaces_file_provider() {
        let definition = file(
            "[project]\nname = \"a\"\nplatform = \"web\"\n\
             [features]\nanalytics = true\nanalytics_provider = \"amplitude\"\n",
        );
        let project = build_config(
            &args(&["--from", "trellis.toml", "--analytics-provider", "mixpanel"]),
            Some(&definition),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(project.features().analytics, Some(AnalyticsProvider::Mixpanel));
    }

    #[test]
    fn configured_provider_is_the_fallback() {
        let mut config = AppConfig::default();
        config.defaults.analytics_provider = "amplitude".into();
        let project = build_config(&args(&["a", "--analytics"]), None, &config).unwrap();
        assert_eq!(project.features().analytics, Some(AnalyticsProvider::Amplitude));
    }

    #[test]
    fn two_providers_are_rejected() {
        let err = build_config(
            &args(&[
                "a",
                "--analytics",
                "--analytics-provider",
                "firebase",
                "--analytics-provider",
                "amplitude",
            ]),
            None,
            &AppConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn provider_without_analytics_is_rejected() {
        let err = build_config(
            &args(&["a", "--analytics-provider", "mixpanel"]),
            None,
            &AppConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("requires analytics to be enabled"));
    }

    #[test]
    fn name_must_come_from_somewhere() {
        let definition = file("[project]\nplatform = \"web\"\n");
        let err = build_config(
            &args(&["--from", "trellis.toml"]),
            Some(&definition),
            &AppConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn invalid_name_is_a_core_validation_error() {
        let err = build_config(&args(&["9lives"]), None, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert!(err.to_string().contains("must start with a letter"));
    }

    #[test]
    fn plan_summary_lists_manifest_last() {
        let project = build_config(&args(&["shop", "--api"]), None, &AppConfig::default()).unwrap();
        let plan = service(false).unwrap().plan(&project).unwrap();
        let summary = PlanSummary::new(&plan, Path::new("shop"));
        assert_eq!(summary.files.last(), Some(&"package.json"));
        assert_eq!(summary.package_json["name"], "shop");
        assert!(summary.package_json["dependencies"]["axios"].is_string());
    }

    #[test]
    fn confirmation_answers() {
        for yes in ["", "\n", "y", "Yes\n"] {
            assert!(is_yes(yes), "{yes:?}");
        }
        for no in ["n", "no\n", "maybe"] {
            assert!(!is_yes(no), "{no:?}");
        }
    }
}
