//! Integration tests for the boolmin binary

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, ExitStatus};

fn run_boolmin(dir: &Path, args: &[&str]) -> (ExitStatus, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_boolmin"))
        .args(args)
        .current_dir(dir)
        .env_remove("BOOLMIN_LOG")
        .output()
        .expect("Failed to execute boolmin");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (output.status, stdout, stderr)
}

#[test]
fn test_cmd_simplify_text() {
    let dir = tempfile::tempdir().unwrap();
    let (status, stdout, _) =
        run_boolmin(dir.path(), &["simplify", "-m", "1,3,5,7", "-n", "3"]);

    assert!(status.success());
    assert!(stdout.contains("SOP = C"), "stdout: {}", stdout);
    assert!(stdout.contains("variables:  A, B, C"));
}

#[test]
fn test_cmd_simplify_json() {
    let dir = tempfile::tempdir().unwrap();
    let (status, stdout, _) = run_boolmin(
        dir.path(),
        &["simplify", "--minterms", "1, 2", "--vars", "2", "--mode", "pos", "--json"],
    );

    assert!(status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["simplified"], "(A + B) · (A' + B')");
    assert_eq!(value["mode"], "POS");
}

#[test]
fn test_cmd_simplify_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _, stderr) = run_boolmin(dir.path(), &["simplify", "-m", "0,8", "-n", "3"]);

    assert!(!status.success());
    assert!(
        stderr.contains("Term 8 is out of range. Valid range: 0-7"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_cmd_simplify_uses_config_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("boolmin.yaml"),
        "defaults:\n  num_vars: 2\n  mode: POS\noutput:\n  format: json\n",
    )
    .unwrap();

    let (status, stdout, _) = run_boolmin(dir.path(), &["simplify", "-m", "0"]);

    assert!(status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["simplified"], "(A') · (B')");
    assert_eq!(value["variables"], serde_json::json!(["A", "B"]));
}

#[test]
fn test_cmd_simplify_missing_minterms() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _, stderr) = run_boolmin(dir.path(), &["simplify", "-n", "3"]);

    assert!(!status.success());
    assert!(stderr.contains("Usage: boolmin simplify"));
}

#[test]
fn test_cmd_batch_reports_each_request() {
    let dir = tempfile::tempdir().unwrap();
    let requests = r#"
- minterms: [0]
  num_vars: 2
- minterms: [1, 3, 5, 7]
- minterms: []
"#;
    fs::write(dir.path().join("requests.yaml"), requests).unwrap();

    let (status, stdout, stderr) =
        run_boolmin(dir.path(), &["batch", "requests.yaml", "--json"]);

    assert!(!status.success());
    assert!(
        stderr.contains("1 of 3 requests failed"),
        "stderr: {}",
        stderr
    );

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value[0]["simplified"], "A'B'");
    assert_eq!(value[1]["simplified"], "C");
    assert_eq!(value[2]["error"], "Minterms must be a non-empty list");
}

#[test]
fn test_cmd_schema() {
    let dir = tempfile::tempdir().unwrap();
    let (status, stdout, _) = run_boolmin(dir.path(), &["schema", "request"]);

    assert!(status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(value["properties"]["minterms"].is_object());
}

#[test]
fn test_unknown_command() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _, stderr) = run_boolmin(dir.path(), &["frobnicate"]);

    assert!(!status.success());
    assert!(stderr.contains("Unknown command: frobnicate"));
}
