//! Tests for error handling, exit codes, and suggestions.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn showcase(temp: &TempDir) -> Command {
    let config = temp.path().join("config.toml");
    fs::write(&config, "").unwrap();
    let mut cmd = Command::cargo_bin("showcase").unwrap();
    cmd.current_dir(temp.path())
        .env_remove("SHOWCASE_SITE_FILE")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn test_missing_script_exits_3() {
    let temp = TempDir::new().unwrap();
    showcase(&temp)
        .args(["replay", "nope.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_malformed_script_exits_2_with_example() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.json");
    fs::write(&script, r#"[{"type": "teleport"}]"#).unwrap();

    showcase(&temp)
        .arg("replay")
        .arg(&script)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid event script"))
        .stderr(predicate::str::contains("viewport_width"));
}

#[test]
fn test_empty_gallery_is_rejected() {
    let temp = TempDir::new().unwrap();
    let site = temp.path().join("site.json");
    fs::write(&site, r#"{"gallery": []}"#).unwrap();

    showcase(&temp)
        .arg("check")
        .arg("--site")
        .arg(&site)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gallery"));
}

#[test]
fn test_unsupported_site_extension_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let site = temp.path().join("site.yaml");
    fs::write(&site, "projects: []").unwrap();

    showcase(&temp)
        .arg("check")
        .arg("--site")
        .arg(&site)
        .assert()
        .code(4)
        .stderr(predicate::str::contains(".toml or .json"));
}

#[test]
fn test_missing_explicit_config_exits_4() {
    let temp = TempDir::new().unwrap();
    Command::cargo_bin("showcase")
        .unwrap()
        .current_dir(temp.path())
        .args(["--config", "/no/such/showcase.toml", "check"])
        .assert()
        .code(4);
}

#[test]
fn test_live_conflicts_with_fail_stage() {
    let temp = TempDir::new().unwrap();
    showcase(&temp)
        .args(["replay", "s.json", "--live", "--fail-stage", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unknown_config_key_exits_4() {
    let temp = TempDir::new().unwrap();
    showcase(&temp)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}
