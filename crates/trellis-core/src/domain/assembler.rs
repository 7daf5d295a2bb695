//! Dependency assembler: active dependency groups → manifest.

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{
    config::ProjectConfig,
    entities::{Blueprint, DependencyManifest, GroupEntry},
    error::DomainError,
    predicates::ALWAYS,
    versions::VersionTable,
};

/// A bug in a blueprint or version table, independent of any configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableDefect {
    #[error("section '{section}' requests '{package}', which has no canonical version")]
    Unversioned {
        package: &'static str,
        section: &'static str,
    },

    #[error("section '{section}' pins '{package}' to '{pin}' but the canonical version is '{canonical}'")]
    PinMismatch {
        package: &'static str,
        pin: &'static str,
        canonical: &'static str,
        section: &'static str,
    },
}

/// Build the manifest for `config`.
///
/// Baseline groups are applied first, then every other group whose trigger
/// holds, in declaration order. Constraints and kinds always come from
/// `versions`.
pub fn assemble(
    blueprint: &Blueprint,
    config: &ProjectConfig,
    versions: &VersionTable,
) -> Result<DependencyManifest, DomainError> {
    let mut manifest = DependencyManifest::new();

    for entry in baseline_first(blueprint) {
        let trigger = entry.group.trigger;
        if !trigger.holds(config) {
            continue;
        }
        for request in entry.group.packages {
            let canonical = versions
                .get(request.name)
                .ok_or_else(|| DomainError::UnversionedPackage {
                    package: request.name.to_string(),
                })?;

            if let Some(pin) = request.pin.filter(|p| *p != canonical.constraint) {
                warn!(
                    package = request.name,
                    pin,
                    canonical = canonical.constraint,
                    section = entry.section,
                    "dependency group pin disagrees with canonical version; using canonical"
                );
            }

            debug!(
                package = request.name,
                constraint = canonical.constraint,
                trigger = trigger.name,
                "adding package"
            );
            manifest.insert(request.name, canonical.constraint, canonical.kind, Some(trigger.name));
        }
    }

    Ok(manifest)
}

/// Check every group of `blueprint` against `versions`, regardless of
/// configuration.
pub fn audit(blueprint: &Blueprint, versions: &VersionTable) -> Vec<TableDefect> {
    let mut defects = Vec::new();
    for entry in blueprint.groups() {
        for request in entry.group.packages {
            match versions.get(request.name) {
                None => defects.push(TableDefect::Unversioned {
                    package: request.name,
                    section: entry.section,
                }),
                Some(canonical) => {
                    if let Some(pin) = request.pin.filter(|p| *p != canonical.constraint) {
                        defects.push(TableDefect::PinMismatch {
                            package: request.name,
                            pin,
                            canonical: canonical.constraint,
                            section: entry.section,
                        });
                    }
                }
            }
        }
    }
    defects
}

fn baseline_first(blueprint: &Blueprint) -> impl Iterator<Item = &GroupEntry> {
    let groups = blueprint.groups();
    let is_baseline = |g: &&GroupEntry| g.group.trigger.is(&ALWAYS);
    groups
        .iter()
        .filter(is_baseline)
        .chain(groups.iter().filter(move |g| !is_baseline(g)))
}
