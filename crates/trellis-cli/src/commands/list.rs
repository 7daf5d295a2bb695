//! Implementation of the `trellis list` command.

use tracing::debug;

use trellis_adapters::BuiltinStore;
use trellis_core::application::{BlueprintInfo, CatalogService};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = CatalogService::new(Box::new(BuiltinStore::with_builtin()?));
    let blueprints = filter(service.list()?, &args);
    debug!(count = blueprints.len(), "blueprints listed");

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available blueprints:")?;
            if blueprints.is_empty() {
                output.print("  (none match the given filters)")?;
            }
            for row in table(&blueprints) {
                output.print(&row)?;
            }
        }
        ListFormat::Json => output.json(&blueprints)?,
        ListFormat::List => {
            for info in &blueprints {
                output.data(&info.id)?;
            }
        }
        ListFormat::Csv => {
            for row in csv(&blueprints) {
                output.data(&row)?;
            }
        }
    }

    Ok(())
}

fn filter(blueprints: Vec<BlueprintInfo>, args: &ListArgs) -> Vec<BlueprintInfo> {
    let platform = args
        .platform
        .map(|p| trellis_core::domain::Platform::from(p).to_string());
    let state = args
        .state
        .map(|s| trellis_core::domain::StateManagement::from(s).to_string());

    blueprints
        .into_iter()
        .filter(|b| platform.as_ref().is_none_or(|p| &b.platform == p))
        .filter(|b| state.as_ref().is_none_or(|s| &b.state == s))
        .collect()
}

fn table(blueprints: &[BlueprintInfo]) -> Vec<String> {
    let mut rows = Vec::with_capacity(blueprints.len() + 1);
    rows.push(format!(
        "  {:<16} {:<22} {:>5} {:>9}  {}",
        "ID", "TOOLCHAIN", "FILES", "OPTIONAL", "DESCRIPTION"
    ));
    for b in blueprints {
        rows.push(format!(
            "  {:<16} {:<22} {:>5} {:>9}  {}",
            b.id, b.toolchain, b.baseline_files, b.optional_files, b.description
        ));
    }
    rows
}

fn csv(blueprints: &[BlueprintInfo]) -> Vec<String> {
    let mut rows = vec!["id,platform,state,baseline_files,optional_files,features".to_string()];
    for b in blueprints {
        rows.push(format!(
            "{},{},{},{},{},{}",
            b.id,
            b.platform,
            b.state,
            b.baseline_files,
            b.optional_files,
            b.features.join(";")
        ));
    }
    rows
}
