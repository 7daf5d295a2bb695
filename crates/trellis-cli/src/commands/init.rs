//! `trellis init`: write a default configuration file.

use std::path::{Path, PathBuf};

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const PREAMBLE: &str = "\
# Trellis configuration.
# Command-line flags win over these values; TRELLIS__SECTION__KEY
# environment variables win over the file.

";

/// Create a default Trellis configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let path = if args.local {
        PathBuf::from(LOCAL_FILE)
    } else {
        AppConfig::config_path()
    };

    if path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    write_default(&path)?;
    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}

fn write_default(path: &Path) -> CliResult<()> {
    let body = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, format!("{PREAMBLE}{body}"))
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}
