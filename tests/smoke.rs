//! Smoke tests for the accessform binary
//!
//! Each test runs the built binary in an isolated temp directory (marked as a repository
//! root so config discovery never escapes it) and checks exit codes and stdout.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn accessform_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_accessform"))
}

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    temp
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(accessform_bin())
        .current_dir(dir)
        .env_remove("ACCESSFORM_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

const EDIT_SESSION: &str = r#"{
    "organizationId": "org-1",
    "members": [
        {"id": "u1", "name": "Zoe"},
        {"id": "u2", "name": "Adam"},
        {"id": "u3", "name": "Mia"}
    ],
    "collections": [
        {"id": "c1", "name": "Vault"},
        {"id": "c2", "name": "Archive"}
    ],
    "group": {
        "id": "g-1",
        "name": "Ops",
        "collections": [{"id": "c1", "readOnly": true}]
    },
    "actions": [
        {"addCollection": "c2"},
        {"removeCollection": "c1"},
        {"addMember": "u3"}
    ]
}"#;

#[test]
fn test_help_lists_commands() {
    let temp = workspace();
    let output = run_in(temp.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("group"));
    assert!(stdout.contains("secret"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_group_edit_session_outputs_request() {
    let temp = workspace();
    write(temp.path(), "session.json", EDIT_SESSION);

    let output = run_in(temp.path(), &["group", "session.json"]);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Ops");
    assert_eq!(
        json["collections"],
        serde_json::json!([{"id": "c2", "readOnly": false, "hidePasswords": false}])
    );
}

#[test]
fn test_group_state_reports_lists() {
    let temp = workspace();
    write(temp.path(), "session.json", EDIT_SESSION);

    let output = run_in(temp.path(), &["--compact", "group", "session.json", "--state"]);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "edit");
    assert_eq!(json["members"]["selected"], serde_json::json!(["u3"]));
    assert_eq!(json["members"]["available"], serde_json::json!(["u2", "u1"]));
    assert_eq!(json["collections"]["available"], serde_json::json!(["c1"]));
}

#[test]
fn test_missing_group_name_exits_with_validation_code() {
    let temp = workspace();
    write(temp.path(), "session.json", r#"{"organizationId": "org-1"}"#);

    let output = run_in(temp.path(), &["group", "session.json"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_strict_unknown_id_exits_with_code_5() {
    let temp = workspace();
    write(
        temp.path(),
        "session.json",
        r#"{"organizationId": "org-1", "actions": [{"setName": "x"}, {"addMember": "ghost"}]}"#,
    );

    let lenient = run_in(temp.path(), &["group", "session.json"]);
    assert_eq!(lenient.status.code(), Some(0));

    let strict = run_in(temp.path(), &["--strict", "group", "session.json"]);
    assert_eq!(strict.status.code(), Some(5));
}

#[test]
fn test_strict_from_config_file() {
    let temp = workspace();
    fs::create_dir(temp.path().join(".accessform")).unwrap();
    write(
        &temp.path().join(".accessform"),
        "config.toml",
        "[selection]\nstrict = true\n",
    );
    write(
        temp.path(),
        "session.json",
        r#"{"organizationId": "org-1", "actions": [{"setName": "x"}, {"removeCollection": "nope"}]}"#,
    );

    let output = run_in(temp.path(), &["group", "session.json"]);
    assert_eq!(output.status.code(), Some(5));

    let config = run_in(temp.path(), &["config"]);
    assert!(String::from_utf8_lossy(&config.stdout).contains("strict = true (config)"));
}

#[test]
fn test_secret_add_session() {
    let temp = workspace();
    write(
        temp.path(),
        "secret.json",
        r#"{
            "operation": {"organizationId": "org-1", "operation": "add"},
            "name": "api-key",
            "value": "s3cr3t",
            "notes": "rotated monthly"
        }"#,
    );

    let output = run_in(temp.path(), &["secret", "secret.json"]);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["action"], "create");
    assert_eq!(json["secret"]["name"], "api-key");
    assert_eq!(json["secret"]["note"], "rotated monthly");
    assert!(json["secret"].get("id").is_none());
}

#[test]
fn test_malformed_session_exits_with_code_3() {
    let temp = workspace();
    write(temp.path(), "secret.json", "{not json");

    let output = run_in(temp.path(), &["secret", "secret.json"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_missing_explicit_config_exits_with_code_2() {
    let temp = workspace();
    let output = run_in(temp.path(), &["--config", "absent.toml", "config"]);
    assert_eq!(output.status.code(), Some(2));
}
