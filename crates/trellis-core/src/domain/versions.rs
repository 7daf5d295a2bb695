//! The canonical version table.
//!
//! Every package a blueprint may request resolves to exactly one constraint
//! here. Dependency groups can carry a pin, but the table wins.

use std::collections::BTreeMap;

use crate::domain::{error::DomainError, value_objects::DependencyKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageVersion {
    pub constraint: &'static str,
    pub kind: DependencyKind,
}

/// One row of a version table as it is written in source.
pub type VersionRow = (&'static str, &'static str, DependencyKind);

#[derive(Debug, Clone, Default)]
pub struct VersionTable {
    packages: BTreeMap<&'static str, PackageVersion>,
}

impl VersionTable {
    /// Build a table from rows.
    ///
    /// A package listed twice is tolerated only if both rows agree; any
    /// disagreement in constraint or kind is a `ConflictingVersions` defect.
    pub fn from_rows(rows: &[VersionRow]) -> Result<Self, DomainError> {
        let mut packages: BTreeMap<&'static str, PackageVersion> = BTreeMap::new();
        for &(name, constraint, kind) in rows {
            let version = PackageVersion { constraint, kind };
            match packages.get(name) {
                Some(existing) if *existing != version => {
                    return Err(DomainError::ConflictingVersions {
                        package: name.to_string(),
                        first: describe(existing),
                        second: describe(&version),
                    });
                }
                Some(_) => {}
                None => {
                    packages.insert(name, version);
                }
            }
        }
        Ok(Self { packages })
    }

    pub fn get(&self, package: &str) -> Option<&PackageVersion> {
        self.packages.get(package)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PackageVersion)> {
        self.packages.iter().map(|(k, v)| (*k, v))
    }
}

fn describe(v: &PackageVersion) -> String {
    match v.kind {
        DependencyKind::Runtime => v.constraint.to_string(),
        DependencyKind::Dev => format!("{} (dev)", v.constraint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DependencyKind::{Dev, Runtime};

    #[test]
    fn identical_duplicates_collapse() {
        let table = VersionTable::from_rows(&[
            ("react", "18.2.0", Runtime),
            ("react", "18.2.0", Runtime),
            ("vite", "^5.2.0", Dev),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("vite").unwrap().kind, Dev);
    }

    #[test]
    fn conflicting_constraints_are_rejected() {
        let err = VersionTable::from_rows(&[
            ("react", "18.2.0", Runtime),
            ("react", "^19.0.0", Runtime),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::ConflictingVersions {
                package: "react".into(),
                first: "18.2.0".into(),
                second: "^19.0.0".into(),
            }
        );
    }

    #[test]
    fn kind_disagreement_is_a_conflict() {
        let err = VersionTable::from_rows(&[("jest", "^29.7.0", Dev), ("jest", "^29.7.0", Runtime)])
            .unwrap_err();
        assert!(err.to_string().contains("(dev)"));
    }
}
