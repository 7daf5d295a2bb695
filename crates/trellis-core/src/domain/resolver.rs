//! Bundle resolver: configuration × blueprint → ordered file set.
//!
//! Resolution runs in two phases. Phase one evaluates every predicate and
//! checks path uniqueness without touching a content builder. Phase two
//! runs builders for the admitted entries only. A failing resolution has
//! therefore never produced any content.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::{
    config::ProjectConfig,
    entities::{Blueprint, ResolvedFile, ResolvedFileSet, SpecEntry},
    error::DomainError,
};

/// Resolve the file set `config` produces against `blueprint`.
pub fn resolve(
    blueprint: &Blueprint,
    config: &ProjectConfig,
) -> Result<ResolvedFileSet, DomainError> {
    config.validate()?;

    let admitted = admit(blueprint, config)?;

    let files = admitted
        .into_iter()
        .map(|entry| {
            let spec = entry.spec;
            let content = (spec.build)(config);
            debug!(
                path = spec.path,
                origin = spec.include.name,
                bytes = content.len(),
                "resolved file"
            );
            ResolvedFile {
                path: spec.path.to_string(),
                content,
                origin: spec.include.name,
            }
        })
        .collect();

    Ok(files)
}

/// Phase one: the entries whose predicate holds, in declaration order.
fn admit<'b>(
    blueprint: &'b Blueprint,
    config: &ProjectConfig,
) -> Result<Vec<&'b SpecEntry>, DomainError> {
    let mut seen: HashMap<&'static str, usize> = HashMap::new();
    let mut admitted = Vec::new();

    for (index, entry) in blueprint.entries().iter().enumerate() {
        if !entry.spec.include.holds(config) {
            trace!(path = entry.spec.path, predicate = entry.spec.include.name, "excluded");
            continue;
        }
        if let Some(&first) = seen.get(entry.spec.path) {
            return Err(DomainError::DuplicatePath {
                path: entry.spec.path.to_string(),
                first: describe(first, &blueprint.entries()[first]),
                second: describe(index, entry),
            });
        }
        seen.insert(entry.spec.path, index);
        admitted.push(entry);
    }

    Ok(admitted)
}

fn describe(index: usize, entry: &SpecEntry) -> String {
    format!("entry #{index} in section '{}'", entry.section)
}
