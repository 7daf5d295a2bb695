//! Integration tests for trellis-core through its public API only.

use std::path::Path;
use std::sync::{Arc, Mutex};

use trellis_core::{
    application::ApplicationError,
    domain::{
        DependencyGroup, DependencyKind, DomainError, FileSpec, PackageRequest, Section,
        predicates::{ALWAYS, LOCALIZATION},
    },
    prelude::*,
};

fn app(c: &ProjectConfig) -> String {
    format!("import React from 'react';\nexport const name = '{}';\n", c.name())
}

fn i18n(_: &ProjectConfig) -> String {
    concat!(
        "import i18next from 'i18next';\n",
        "import en from '../../locales/en.json';\n",
        "export default i18next;\n",
    )
    .into()
}

fn locale(_: &ProjectConfig) -> String {
    "{ \"hello\": \"Hello\" }\n".into()
}

static BASE: Section = Section {
    name: "web-baseline",
    files: &[FileSpec::new("src/App.tsx", &ALWAYS, app)],
    groups: &[DependencyGroup {
        trigger: &ALWAYS,
        packages: &[PackageRequest::new("react")],
    }],
};

static I18N: Section = Section {
    name: "localization",
    files: &[
        FileSpec::new("src/i18n/index.ts", &LOCALIZATION, i18n),
        FileSpec::new("locales/en.json", &LOCALIZATION, locale),
    ],
    groups: &[DependencyGroup {
        trigger: &LOCALIZATION,
        packages: &[PackageRequest::new("i18next")],
    }],
};

struct Store;

impl BlueprintStore for Store {
    fn get(&self, key: BlueprintKey) -> TrellisResult<Blueprint> {
        if key.platform != Platform::Web {
            return Err(key.unknown().into());
        }
        Ok(Blueprint::builder(key).section(&BASE).section(&I18N).build()?)
    }

    fn list(&self) -> TrellisResult<Vec<Blueprint>> {
        StateManagement::ALL
            .into_iter()
            .map(|s| self.get(BlueprintKey::new(Platform::Web, s)))
            .collect()
    }
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<(String, String)>>>);

impl Filesystem for Captured {
    fn create_dir_all(&self, _: &Path) -> TrellisResult<()> {
        Ok(())
    }
    fn write_file(&self, path: &Path, content: &str) -> TrellisResult<()> {
        self.0
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?
            .push((path.display().to_string(), content.to_string()));
        Ok(())
    }
    fn exists(&self, _: &Path) -> bool {
        false
    }
    fn remove_dir_all(&self, _: &Path) -> TrellisResult<()> {
        Ok(())
    }
    fn rename(&self, _: &Path, _: &Path) -> TrellisResult<()> {
        Ok(())
    }
}

fn versions() -> VersionTable {
    VersionTable::from_rows(&[
        ("react", "18.3.1", DependencyKind::Runtime),
        ("i18next", "^23.11.5", DependencyKind::Runtime),
    ])
    .unwrap()
}

fn service(fs: Captured) -> GenerationService {
    GenerationService::new(
        Box::new(Store),
        versions(),
        Box::new(FilesystemEmitter::new(Box::new(fs))),
    )
}

fn config(localization: bool) -> ProjectConfig {
    ProjectConfig::builder()
        .name("atlas")
        .platform(Platform::Web)
        .localization(localization)
        .build()
        .unwrap()
}

#[test]
fn generate_writes_plan_and_manifest() {
    let fs = Captured::default();
    let plan = service(fs.clone()).generate(&config(true), "atlas").unwrap();

    assert_eq!(plan.files.len(), 3);
    assert!(plan.advisories.is_empty());

    let written = fs.0.lock().unwrap();
    let paths: Vec<&str> = written.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths.len(), 4);
    assert!(paths.iter().any(|p| p.ends_with("package.json")));
    let manifest = &written.iter().find(|(p, _)| p.ends_with("package.json")).unwrap().1;
    assert!(manifest.contains("\"i18next\": \"^23.11.5\""));
}

#[test]
fn disabled_feature_leaves_no_trace() {
    let plan = service(Captured::default()).plan(&config(false)).unwrap();
    assert_eq!(plan.files.paths().collect::<Vec<_>>(), ["src/App.tsx"]);
    assert!(!plan.manifest.contains("i18next"));
}

#[test]
fn missing_blueprint_is_unknown_variant() {
    let mobile = ProjectConfig::builder()
        .name("atlas")
        .platform(Platform::Mobile)
        .build()
        .unwrap();
    let err = service(Captured::default()).plan(&mobile).unwrap_err();
    assert!(matches!(err, TrellisError::Domain(DomainError::UnknownVariant { .. })));
    assert!(!err.suggestions().is_empty());
}

#[test]
fn catalog_lists_store_contents() {
    let infos = CatalogService::new(Box::new(Store)).list().unwrap();
    assert_eq!(infos.len(), 3);
    assert!(infos.iter().all(|i| i.platform == "web"));
    assert_eq!(infos[0].features, ["localization"]);
}
