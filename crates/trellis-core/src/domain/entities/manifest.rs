//! The dependency manifest and its `package.json` rendering.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::domain::{
    config::ProjectConfig,
    value_objects::{DependencyKind, Platform},
};

/// Where the rendered manifest is written, relative to the project root.
pub const MANIFEST_PATH: &str = "package.json";

/// One declared package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub constraint: String,
    pub kind: DependencyKind,
    /// Names of the predicates that pulled this package in.
    pub justified_by: Vec<&'static str>,
}

/// Package name → entry, iterated in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyManifest {
    entries: BTreeMap<String, ManifestEntry>,
}

impl DependencyManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package, or record another justification for one already
    /// present. The first constraint and kind seen are kept.
    pub fn insert(
        &mut self,
        name: &str,
        constraint: &str,
        kind: DependencyKind,
        justification: Option<&'static str>,
    ) {
        let entry = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| ManifestEntry {
                constraint: constraint.to_string(),
                kind,
                justified_by: Vec::new(),
            });
        if let Some(why) = justification {
            if !entry.justified_by.contains(&why) {
                entry.justified_by.push(why);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries of one kind, sorted by name.
    pub fn of_kind(&self, kind: DependencyKind) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.iter().filter(move |(_, e)| e.kind == kind)
    }

    /// Build the `package.json` document for this manifest.
    pub fn to_package_json(&self, config: &ProjectConfig) -> Value {
        let section = |kind| {
            self.of_kind(kind)
                .map(|(name, e)| (name.to_string(), Value::String(e.constraint.clone())))
                .collect::<Map<String, Value>>()
        };

        let mut doc = json!({
            "name": config.package_name(),
            "version": "0.1.0",
            "private": true,
            "scripts": scripts(config),
            "dependencies": section(DependencyKind::Runtime),
            "devDependencies": section(DependencyKind::Dev),
        });

        if let Value::Object(map) = &mut doc {
            match config.platform() {
                Platform::Mobile => {
                    map.insert("main".into(), json!("expo/AppEntry.js"));
                }
                Platform::Web => {
                    map.insert("type".into(), json!("module"));
                }
            }
        }
        doc
    }

    /// Pretty-printed `package.json` text with a trailing newline.
    pub fn render_package_json(&self, config: &ProjectConfig) -> String {
        let mut text = serde_json::to_string_pretty(&self.to_package_json(config))
            .unwrap_or_else(|_| String::from("{}"));
        text.push('\n');
        text
    }
}

fn scripts(config: &ProjectConfig) -> Map<String, Value> {
    let mut scripts: Vec<(&str, &str)> = match config.platform() {
        Platform::Mobile => vec![
            ("start", "expo start"),
            ("android", "expo start --android"),
            ("ios", "expo start --ios"),
            ("web", "expo start --web"),
        ],
        Platform::Web => vec![
            ("dev", "vite"),
            ("build", "tsc && vite build"),
            ("preview", "vite preview"),
        ],
    };
    if config.features().tests {
        scripts.push(match config.platform() {
            Platform::Mobile => ("test", "jest"),
            Platform::Web => ("test", "vitest run"),
        });
    }
    scripts
        .into_iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(platform: Platform, tests: bool) -> ProjectConfig {
        ProjectConfig::builder()
            .name("shop")
            .platform(platform)
            .tests(tests)
            .build()
            .unwrap()
    }

    #[test]
    fn insert_merges_justifications() {
        let mut m = DependencyManifest::new();
        m.insert("react", "18.2.0", DependencyKind::Runtime, Some("baseline"));
        m.insert("react", "18.2.0", DependencyKind::Runtime, Some("tests"));
        m.insert("react", "18.2.0", DependencyKind::Runtime, Some("tests"));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("react").unwrap().justified_by, ["baseline", "tests"]);
    }

    #[test]
    fn package_json_splits_sections() {
        let mut m = DependencyManifest::new();
        m.insert("zustand", "^4.5.0", DependencyKind::Runtime, Some("baseline"));
        m.insert("vite", "^5.2.0", DependencyKind::Dev, Some("baseline"));

        let doc = m.to_package_json(&config(Platform::Web, false));
        assert_eq!(doc["name"], "shop");
        assert_eq!(doc["dependencies"]["zustand"], "^4.5.0");
        assert_eq!(doc["devDependencies"]["vite"], "^5.2.0");
        assert!(doc["dependencies"].get("vite").is_none());
        assert_eq!(doc["type"], "module");
        assert!(doc["scripts"].get("test").is_none());
    }

    #[test]
    fn package_json_name_is_npm_safe() {
        let cfg = ProjectConfig::builder()
            .name("MyApp")
            .platform(Platform::Web)
            .build()
            .unwrap();
        let doc = DependencyManifest::new().to_package_json(&cfg);
        assert_eq!(doc["name"], "myapp");
    }

    #[test]
    fn test_script_follows_platform() {
        let m = DependencyManifest::new();
        let web = m.to_package_json(&config(Platform::Web, true));
        let mobile = m.to_package_json(&config(Platform::Mobile, true));
        assert_eq!(web["scripts"]["test"], "vitest run");
        assert_eq!(mobile["scripts"]["test"], "jest");
        assert_eq!(mobile["main"], "expo/AppEntry.js");
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut m = DependencyManifest::new();
        m.insert("b", "1", DependencyKind::Runtime, None);
        m.insert("a", "1", DependencyKind::Runtime, None);
        let cfg = config(Platform::Mobile, false);
        let text = m.render_package_json(&cfg);
        assert_eq!(text, m.clone().render_package_json(&cfg));
        assert!(text.find("\"a\"").unwrap() < text.find("\"b\"").unwrap());
        assert!(text.ends_with('\n'));
    }
}
