//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["ignore_case"], false);
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordscan.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".wordscan.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_yaml_config_in_parent_dir() {
    let tmp = TempDir::new().unwrap();
    let sub = tmp.path().join("notes").join("drafts");
    fs::create_dir_all(&sub).unwrap();
    fs::write(tmp.path().join("wordscan.yaml"), "ignore_case: true\n").unwrap();

    let json = info_json(&sub);

    assert_eq!(json["config"]["ignore_case"], true);
}

#[test]
fn explicit_config_flag_wins() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordscan.toml"), r#"log_level = "warn""#).unwrap();
    let explicit = tmp.path().join("custom.json");
    fs::write(&explicit, r#"{"log_level": "error"}"#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(json["config"]["log_level"], "error");
}

#[test]
fn invalid_config_fails_with_message() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordscan.toml"), r#"log_level = "loud""#).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

// =============================================================================
// Config values reaching commands
// =============================================================================

#[test]
fn ignore_case_config_applies_to_find() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordscan.toml"), "ignore_case = true\n").unwrap();
    fs::write(tmp.path().join("input.txt"), "Hello hello Hello").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "find", "input.txt", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n6\n12\n"));
}

#[test]
fn input_limit_rejects_large_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordscan.toml"), "max_input_bytes = 8\n").unwrap();
    fs::write(tmp.path().join("input.txt"), "this text is longer than eight bytes").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "count", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_input_limit_allows_large_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("wordscan.toml"),
        "max_input_bytes = 8\ndisable_input_limit = true\n",
    )
    .unwrap();
    fs::write(tmp.path().join("input.txt"), "this text is longer than eight bytes").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "count", "input.txt", "--only", "words"])
        .assert()
        .success()
        .stdout(predicate::str::diff("7\n"));
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordscan.toml"), "ignore_case = false\n").unwrap();

    let output = cmd()
        .env("WORDSCAN_IGNORE_CASE", "true")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(json["config"]["ignore_case"], true);
}

#[test]
fn log_dir_writes_jsonl_file() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");

    cmd()
        .env("WORDSCAN_LOG_DIR", logs.to_str().unwrap())
        .args(["-C", tmp.path().to_str().unwrap(), "-v", "info"])
        .assert()
        .success();

    assert!(logs.join("wordscan.jsonl").is_file());
}
