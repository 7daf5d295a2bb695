//! Exit codes and messages for failing invocations.

mod common;

use std::fs;

use common::trellis;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn two_analytics_providers_are_rejected() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args([
            "new",
            "app",
            "-p",
            "web",
            "--analytics",
            "--analytics-provider",
            "firebase",
            "--analytics-provider",
            "amplitude",
            "--yes",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("mutually exclusive"))
        .stderr(predicate::str::contains("firebase, amplitude"));

    assert!(!temp.path().join("app").exists());
}

#[test]
fn provider_without_analytics_is_rejected() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["new", "app", "-p", "web", "--analytics-provider", "mixpanel", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("requires analytics to be enabled"));
}

#[test]
fn invalid_project_name() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["new", "my.app", "-p", "web", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid character '.'"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn existing_directory_needs_force() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("shop");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("stale.txt"), "old").unwrap();

    trellis(temp.path())
        .args(["new", "shop", "-p", "web", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
    assert!(root.join("stale.txt").exists());

    trellis(temp.path())
        .args(["new", "shop", "-p", "web", "--yes", "--force"])
        .assert()
        .success();
    assert!(!root.join("stale.txt").exists());
    assert!(root.join("package.json").is_file());
}

#[test]
fn forced_generation_into_current_directory_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.txt"), "mine").unwrap();

    trellis(temp.path())
        .args(["new", "shop", "-p", "web", "--yes", "--force", "--output", "."])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("named directory"));
    assert_eq!(fs::read_to_string(temp.path().join("notes.txt")).unwrap(), "mine");
    assert!(!temp.path().join("package.json").exists());
}

#[test]
fn unknown_platform_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["new", "app", "--platform", "desktop"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("desktop"));
}

#[test]
fn missing_definition_file() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["new", "--from", "absent.toml", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read project file"));
}

#[test]
fn bad_definition_file_values() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("trellis.toml"),
        "[project]\nname = \"app\"\nplatform = \"desktop\"\nstate = \"recoil\"\n",
    )
    .unwrap();

    trellis(temp.path())
        .args(["new", "--from", "trellis.toml", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown platform: desktop"));
}

#[test]
fn unknown_config_key() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn broken_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".trellis.toml"), "[defaults]\nplatform = \"desktop\"\n").unwrap();

    trellis(temp.path())
        .arg("list")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn verbose_errors_show_causes_without_hint() {
    let temp = TempDir::new().unwrap();
    trellis(temp.path())
        .args(["-v", "config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--verbose").not());
}
