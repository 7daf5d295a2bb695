//! Blueprint tables: which files a (platform, state) combination can emit,
//! and which packages back them.
//!
//! A blueprint is assembled from static [`Section`]s. Sections own their
//! [`FileSpec`] and [`DependencyGroup`] tables; the blueprint only holds
//! references into them, tagged with the section name for diagnostics.

use std::fmt;

use super::{common, DomainError};
use crate::domain::{
    config::ProjectConfig,
    predicates::Predicate,
    value_objects::{Platform, StateManagement},
};

/// Pure formatter producing the text of one generated file.
pub type ContentBuilder = fn(&ProjectConfig) -> String;

// ── BlueprintKey ──────────────────────────────────────────────────────────────

/// Identifies one blueprint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlueprintKey {
    pub platform: Platform,
    pub state: StateManagement,
}

impl BlueprintKey {
    pub const fn new(platform: Platform, state: StateManagement) -> Self {
        Self { platform, state }
    }

    /// Every supported combination, platform-major.
    pub fn all() -> impl Iterator<Item = BlueprintKey> {
        Platform::ALL.into_iter().flat_map(|platform| {
            StateManagement::ALL
                .into_iter()
                .map(move |state| BlueprintKey::new(platform, state))
        })
    }

    pub fn unknown(&self) -> DomainError {
        DomainError::UnknownVariant {
            platform: self.platform.to_string(),
            state: self.state.to_string(),
        }
    }
}

impl fmt::Display for BlueprintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform, self.state)
    }
}

// ── FileSpec ──────────────────────────────────────────────────────────────────

/// One row of a file specification table.
#[derive(Clone, Copy)]
pub struct FileSpec {
    pub path: &'static str,
    pub build: ContentBuilder,
    pub include: &'static Predicate,
}

impl FileSpec {
    pub const fn new(
        path: &'static str,
        include: &'static Predicate,
        build: ContentBuilder,
    ) -> Self {
        Self {
            path,
            build,
            include,
        }
    }
}

impl fmt::Debug for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSpec")
            .field("path", &self.path)
            .field("include", &self.include.name)
            .finish_non_exhaustive()
    }
}

// ── Dependency groups ─────────────────────────────────────────────────────────

/// A package a group asks for, optionally with the constraint the table
/// author expects. The canonical version table has the final word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageRequest {
    pub name: &'static str,
    pub pin: Option<&'static str>,
}

impl PackageRequest {
    pub const fn new(name: &'static str) -> Self {
        Self { name, pin: None }
    }

    pub const fn pinned(name: &'static str, pin: &'static str) -> Self {
        Self {
            name,
            pin: Some(pin),
        }
    }
}

/// Packages pulled in whenever `trigger` holds.
#[derive(Debug)]
pub struct DependencyGroup {
    pub trigger: &'static Predicate,
    pub packages: &'static [PackageRequest],
}

// ── Sections ──────────────────────────────────────────────────────────────────

/// A named slice of a blueprint: e.g. the web baseline, or the Redux
/// persistence glue.
#[derive(Debug)]
pub struct Section {
    pub name: &'static str,
    pub files: &'static [FileSpec],
    pub groups: &'static [DependencyGroup],
}

/// A file entry together with the section that declared it.
#[derive(Debug, Clone, Copy)]
pub struct SpecEntry {
    pub section: &'static str,
    pub spec: &'static FileSpec,
}

impl fmt::Display for SpecEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.section, self.spec.include.name)
    }
}

/// A dependency group together with the section that declared it.
#[derive(Debug, Clone, Copy)]
pub struct GroupEntry {
    pub section: &'static str,
    pub group: &'static DependencyGroup,
}

// ── Blueprint ─────────────────────────────────────────────────────────────────

/// The file specification table and dependency groups for one key.
#[derive(Debug, Clone)]
pub struct Blueprint {
    key: BlueprintKey,
    description: String,
    sections: Vec<&'static str>,
    entries: Vec<SpecEntry>,
    groups: Vec<GroupEntry>,
}

impl Blueprint {
    pub fn builder(key: BlueprintKey) -> BlueprintBuilder {
        BlueprintBuilder {
            key,
            description: None,
            sections: Vec::new(),
        }
    }

    pub const fn key(&self) -> BlueprintKey {
        self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sections(&self) -> &[&'static str] {
        &self.sections
    }

    /// File entries in declaration order.
    pub fn entries(&self) -> &[SpecEntry] {
        &self.entries
    }

    pub fn groups(&self) -> &[GroupEntry] {
        &self.groups
    }
}

/// Composes a [`Blueprint`] from static sections.
pub struct BlueprintBuilder {
    key: BlueprintKey,
    description: Option<String>,
    sections: Vec<&'static Section>,
}

impl BlueprintBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a section. Declaration order is the order sections are added.
    pub fn section(mut self, section: &'static Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Build the blueprint, checking every declared path is a clean
    /// relative POSIX path and every group names at least one package.
    ///
    /// Duplicate paths are *not* rejected here: two entries may share a
    /// path as long as their predicates never hold together. The resolver
    /// catches the case where they do.
    pub fn build(self) -> Result<Blueprint, DomainError> {
        if self.sections.is_empty() {
            return Err(DomainError::InvalidBlueprint(format!(
                "blueprint {} has no sections",
                self.key
            )));
        }

        let mut entries = Vec::new();
        let mut groups = Vec::new();
        for section in &self.sections {
            for spec in section.files {
                common::check_relative(spec.path)?;
                entries.push(SpecEntry {
                    section: section.name,
                    spec,
                });
            }
            for group in section.groups {
                if group.packages.is_empty() {
                    return Err(DomainError::InvalidBlueprint(format!(
                        "section '{}' declares an empty dependency group for '{}'",
                        section.name, group.trigger.name
                    )));
                }
                groups.push(GroupEntry {
                    section: section.name,
                    group,
                });
            }
        }

        let description = self.description.unwrap_or_else(|| {
            format!(
                "{} with {}",
                self.key.platform.toolchain(),
                self.key.state.display_name()
            )
        });

        Ok(Blueprint {
            key: self.key,
            description,
            sections: self.sections.iter().map(|s| s.name).collect(),
            entries,
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::predicates::{ALWAYS, API};

    fn text(_: &ProjectConfig) -> String {
        String::new()
    }

    static BASE: Section = Section {
        name: "base",
        files: &[FileSpec::new("src/App.tsx", &ALWAYS, text)],
        groups: &[DependencyGroup {
            trigger: &ALWAYS,
            packages: &[PackageRequest::new("react")],
        }],
    };

    static NET: Section = Section {
        name: "net",
        files: &[FileSpec::new("src/api/client.ts", &API, text)],
        groups: &[DependencyGroup {
            trigger: &API,
            packages: &[PackageRequest::pinned("axios", "^1.7.0")],
        }],
    };

    static BAD_PATH: Section = Section {
        name: "bad",
        files: &[FileSpec::new("/etc/passwd", &ALWAYS, text)],
        groups: &[],
    };

    static EMPTY_GROUP: Section = Section {
        name: "empty",
        files: &[],
        groups: &[DependencyGroup {
            trigger: &API,
            packages: &[],
        }],
    };

    fn key() -> BlueprintKey {
        BlueprintKey::new(Platform::Web, StateManagement::Zustand)
    }

    #[test]
    fn entries_follow_section_order() {
        let bp = Blueprint::builder(key()).section(&BASE).section(&NET).build().unwrap();
        let paths: Vec<&str> = bp.entries().iter().map(|e| e.spec.path).collect();
        assert_eq!(paths, ["src/App.tsx", "src/api/client.ts"]);
        assert_eq!(bp.sections(), ["base", "net"]);
        assert_eq!(bp.entries()[1].section, "net");
    }

    #[test]
    fn file_entry_and_group_share_predicate() {
        let bp = Blueprint::builder(key()).section(&NET).build().unwrap();
        assert!(bp.entries()[0].spec.include.is(bp.groups()[0].group.trigger));
    }

    #[test]
    fn default_description_names_toolchain() {
        let bp = Blueprint::builder(key()).section(&BASE).build().unwrap();
        assert_eq!(bp.description(), "React (Vite) with Zustand");
    }

    #[test]
    fn rejects_absolute_paths_and_empty_groups() {
        assert!(Blueprint::builder(key()).section(&BAD_PATH).build().is_err());
        assert!(Blueprint::builder(key()).section(&EMPTY_GROUP).build().is_err());
        assert!(Blueprint::builder(key()).build().is_err());
    }

    #[test]
    fn keys_cover_every_combination() {
        assert_eq!(BlueprintKey::all().count(), 6);
        assert_eq!(key().to_string(), "web/zustand");
    }
}
