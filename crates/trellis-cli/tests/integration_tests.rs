//! End-to-end tests of the `trellis` binary.

mod common;

use std::fs;

use common::trellis;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn package_json(dir: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(dir.join("package.json")).unwrap()).unwrap()
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_env_accepts_any_value() {
    let temp = TempDir::new().unwrap();
    for value in ["1", "true", "yes", "0", ""] {
        trellis(temp.path())
            .env("NO_COLOR", value)
            .args(["list", "--format", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("web/redux"));
    }
}

#[test]
fn new_help_lists_feature_flags() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--analytics-provider"))
        .stdout(predicate::str::contains("--persistence"))
        .stdout(predicate::str::contains("--from"));
}

#[test]
fn new_web_project() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["new", "shop", "--platform", "web", "--state", "zustand", "--api", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'shop' created"))
        .stdout(predicate::str::contains("npm run dev"));

    let root = temp.path().join("shop");
    for path in [
        "index.html",
        "src/main.tsx",
        "src/App.tsx",
        "src/store/useCounterStore.ts",
        "src/api/client.ts",
    ] {
        assert!(root.join(path).is_file(), "missing {path}");
    }
    assert!(!root.join("src/storage/storage.ts").exists());

    let manifest = package_json(&root);
    assert_eq!(manifest["name"], "shop");
    assert!(manifest["dependencies"]["zustand"].is_string());
    assert!(manifest["dependencies"]["axios"].is_string());
    assert!(manifest["dependencies"].get("@reduxjs/toolkit").is_none());
}

#[test]
fn new_mobile_project_with_persistence() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["new", "pocket", "-p", "mobile", "-s", "redux", "--persistence", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npx expo start"));

    let root = temp.path().join("pocket");
    assert!(root.join("App.tsx").is_file());
    assert!(root.join("src/store/persistedStore.ts").is_file());
    assert!(root.join("src/storage/storage.ts").is_file());

    let deps = &package_json(&root)["dependencies"];
    assert!(deps["redux-persist"].is_string());
    assert!(deps["@react-native-async-storage/async-storage"].is_string());
}

#[test]
fn output_directory_overrides_name() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["new", "shop", "-p", "web", "--output", "apps/storefront", "--yes"])
        .assert()
        .success();

    let root = temp.path().join("apps/storefront");
    assert_eq!(package_json(&root)["name"], "shop");
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["new", "preview", "-p", "web", "--tests", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("src/App.test.tsx"))
        .stdout(predicate::str::contains("vitest"));

    assert!(!temp.path().join("preview").exists());
}

#[test]
fn dry_run_as_json() {
    let temp = TempDir::new().unwrap();
    let out = trellis(temp.path())
        .args([
            "--output-format",
            "json",
            "new",
            "pocket",
            "-p",
            "mobile",
            "--analytics",
            "--dry-run",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());

    let summary: Value = serde_json::from_slice(&out.stdout).unwrap();
    let files: Vec<&str> = summary["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f.as_str().unwrap())
        .collect();
    assert_eq!(files.last(), Some(&"package.json"));
    assert!(files.contains(&"src/analytics/providers/firebase.ts"));
    assert!(!files.contains(&"src/analytics/providers/amplitude.ts"));
    assert_eq!(summary["config"]["features"]["analytics"], "firebase");
}

#[test]
fn mixed_case_name_yields_lowercase_package_name() {
    let temp = TempDir::new().unwrap();
    let out = trellis(temp.path())
        .args(["--output-format", "json", "new", "MyApp", "-p", "web", "--dry-run"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let summary: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["package_json"]["name"], "myapp");
    assert_eq!(summary["config"]["name"], "MyApp");
}

#[test]
fn piped_refusal_cancels() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["new", "shop", "-p", "web"])
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"));

    assert!(!temp.path().join("shop").exists());
}

#[test]
fn definition_file_drives_generation() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("trellis.toml"),
        r#"
        [project]
        name = "field-notes"
        platform = "mobile"
        state = "mobx"

        [features]
        localization = true
        analytics = true
        analytics_provider = "mixpanel"
        "#,
    )
    .unwrap();

    trellis(temp.path())
        .args(["new", "--from", "trellis.toml", "--env", "--yes"])
        .assert()
        .success();

    let root = temp.path().join("field-notes");
    for path in [
        "src/store/CounterStore.ts",
        "src/i18n/index.ts",
        "src/analytics/providers/mixpanel.ts",
        "src/config/env.ts",
    ] {
        assert!(root.join(path).is_file(), "missing {path}");
    }
    assert!(package_json(&root)["dependencies"]["mobx"].is_string());
}

#[test]
fn configured_defaults_apply() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".trellis.toml"),
        "[defaults]\nplatform = \"mobile\"\nstate = \"zustand\"\n",
    )
    .unwrap();

    trellis(temp.path()).args(["new", "pocket", "--yes"]).assert().success();

    let root = temp.path().join("pocket");
    assert!(root.join("app.json").is_file());
    assert!(root.join("src/store/useCounterStore.ts").is_file());
}

#[test]
fn list_formats() {
    let temp = TempDir::new().unwrap();

    trellis(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("React Native (Expo)"))
        .stdout(predicate::str::contains("web/mobx"));

    let csv = trellis(temp.path()).args(["list", "--format", "csv"]).output().unwrap();
    assert_eq!(String::from_utf8(csv.stdout).unwrap().lines().count(), 7);

    let ids = trellis(temp.path())
        .args(["list", "--platform", "mobile", "--format", "list"])
        .output()
        .unwrap();
    let ids = String::from_utf8(ids.stdout).unwrap();
    assert_eq!(ids.lines().collect::<Vec<_>>(), ["mobile/redux", "mobile/zustand", "mobile/mobx"]);

    let json = trellis(temp.path()).args(["list", "--format", "json"]).output().unwrap();
    let blueprints: Value = serde_json::from_slice(&json.stdout).unwrap();
    assert_eq!(blueprints.as_array().unwrap().len(), 6);
}

#[test]
fn init_then_config_commands() {
    let temp = TempDir::new().unwrap();

    trellis(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(temp.path().join(".trellis.toml").is_file());

    trellis(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    trellis(temp.path())
        .args(["config", "get", "defaults.state"])
        .assert()
        .success()
        .stdout("redux\n");

    trellis(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".trellis.toml"));

    trellis(temp.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn environment_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("custom.toml");
    fs::write(&file, "[defaults]\nplatform = \"mobile\"\n").unwrap();

    trellis(temp.path())
        .args(["--config", "custom.toml", "config", "get", "defaults.platform"])
        .assert()
        .success()
        .stdout("mobile\n");

    trellis(temp.path())
        .env("TRELLIS__DEFAULTS__PLATFORM", "web")
        .args(["--config", "custom.toml", "config", "get", "defaults.platform"])
        .assert()
        .success()
        .stdout("web\n");
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trellis"));
}
