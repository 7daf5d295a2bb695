//! Consistency validator: does a resolved file set agree with its manifest?
//!
//! Every check runs on every invocation; one failing check never hides the
//! findings of another.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::{DependencyManifest, MANIFEST_PATH, ResolvedFileSet},
    error::DomainError,
    predicates::EXCLUSIVE_FEATURES,
    references::{self, Target},
};

/// A non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// A manifest entry no active predicate asked for.
    UnjustifiedPackage { package: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnjustifiedPackage { package } => {
                write!(f, "package '{package}' is declared but no enabled feature requires it")
            }
        }
    }
}

/// Findings of one validation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<DomainError>,
    pub warnings: Vec<Advisory>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse errors into one `Inconsistent`, or hand back the warnings.
    pub fn into_result(self) -> Result<Vec<Advisory>, DomainError> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(DomainError::Inconsistent {
                issues: self.errors,
            })
        }
    }
}

/// Run every consistency check over `files` and `manifest`.
pub fn validate(files: &ResolvedFileSet, manifest: &DependencyManifest) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_unique_paths(files, &mut report);
    check_references(files, manifest, &mut report);
    check_justified(manifest, &mut report);
    check_exclusive(files, manifest, &mut report);
    report
}

fn check_unique_paths(files: &ResolvedFileSet, report: &mut ValidationReport) {
    let mut first_origin: Vec<(&str, &str)> = Vec::new();
    for file in files {
        if file.path == MANIFEST_PATH {
            report.errors.push(DomainError::DuplicatePath {
                path: file.path.clone(),
                first: file.origin.to_string(),
                second: "dependency manifest".to_string(),
            });
        }
        match first_origin.iter().find(|(p, _)| *p == file.path) {
            Some((_, origin)) => report.errors.push(DomainError::DuplicatePath {
                path: file.path.clone(),
                first: (*origin).to_string(),
                second: file.origin.to_string(),
            }),
            None => first_origin.push((file.path.as_str(), file.origin)),
        }
    }
}

fn check_references(
    files: &ResolvedFileSet,
    manifest: &DependencyManifest,
    report: &mut ValidationReport,
) {
    let paths: HashSet<&str> = files.paths().collect();

    for file in files.iter().filter(|f| references::is_scanned(&f.path)) {
        for specifier in references::specifiers(&file.content) {
            let found = match references::classify(&file.path, specifier) {
                Target::Builtin => true,
                Target::OutsideRoot => false,
                Target::Local(path) => references::candidates(&path)
                    .iter()
                    .any(|c| paths.contains(c.as_str())),
                Target::Package(name) => manifest.contains(&name),
            };
            if !found {
                report.errors.push(DomainError::MissingReference {
                    path: file.path.clone(),
                    target: specifier.to_string(),
                });
            }
        }
    }
}

fn check_justified(manifest: &DependencyManifest, report: &mut ValidationReport) {
    for (name, entry) in manifest.iter() {
        if entry.justified_by.is_empty() {
            report.warnings.push(Advisory::UnjustifiedPackage {
                package: name.to_string(),
            });
        }
    }
}

fn check_exclusive(
    files: &ResolvedFileSet,
    manifest: &DependencyManifest,
    report: &mut ValidationReport,
) {
    let origins: BTreeSet<&str> = files
        .iter()
        .map(|f| f.origin)
        .chain(manifest.iter().flat_map(|(_, e)| e.justified_by.iter().copied()))
        .collect();

    for set in EXCLUSIVE_FEATURES {
        let active: Vec<String> = set
            .members
            .iter()
            .filter(|m| origins.contains(m.name))
            .map(|m| m.name.to_string())
            .collect();
        if active.len() > 1 {
            report.errors.push(DomainError::ConflictingFeatures {
                group: set.label.to_string(),
                members: active,
            });
        }
    }
}
