//! `trellis config`: inspect the effective configuration.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `config get`.
const KEYS: [&str; 5] = [
    "defaults.platform",
    "defaults.state",
    "defaults.analytics_provider",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ key: value }))?;
            } else {
                output.data(&value)?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.data(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::active_path(explicit).display().to_string())?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.platform" => Ok(config.defaults.platform.clone()),
        "defaults.state" => Ok(config.defaults.state.clone()),
        "defaults.analytics_provider" => Ok(config.defaults.analytics_provider.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key '{key}' (known: {})", KEYS.join(", ")),
            source: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_key_resolves() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "{key}");
        }
        assert_eq!(get_config_value(&cfg, "defaults.platform").unwrap(), "web");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn unknown_key_lists_known_ones() {
        let err = get_config_value(&AppConfig::default(), "defaults.lang").unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("defaults.state"));
    }
}
