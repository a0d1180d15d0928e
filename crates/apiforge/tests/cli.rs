//! CLI regression tests for the `apiforge` binary.
//!
//! These invoke the binary as a subprocess to catch regressions in flag
//! names, exit codes, and output formats.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

/// Returns an assert_cmd Command wrapping the `apiforge` binary.
fn apiforge() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("apiforge").expect("apiforge binary not found")
}

fn write_config(dir: &Path, yaml: &str) -> std::path::PathBuf {
    let path = dir.join("apiforge.yaml");
    fs::write(&path, yaml).expect("write config");
    path
}

const VALID_CONFIG: &str = r#"
goServer:
  outputDir: out/server
  packageName: api
spec:
  apiName: User Service
  version: "1.0.0"
  endpoints:
    CreateUser:
      method: POST
      path: /users
      requestBody:
        properties:
          name:
            type: string
            required: true
            nonEmpty: true
      responses:
        201:
          body:
            properties:
              id:
                type: string
                required: true
"#;

#[test]
fn version_prints_full_text() {
    apiforge()
        .arg("version")
        .assert()
        .success()
        .stdout(contains("apiforge version:"))
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_short_prints_only_the_number() {
    let output = apiforge()
        .args(["version", "--short"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let s = String::from_utf8(output).expect("stdout should be UTF-8");
    assert_eq!(s.trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn no_config_prints_help_and_exits_zero() {
    apiforge().assert().success().stdout(contains("--config"));
}

#[test]
fn generate_writes_ir_for_configured_targets() {
    let tmp = TempDir::new().expect("tempdir");
    let config = write_config(tmp.path(), VALID_CONFIG);

    apiforge()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(contains("Generation completed successfully!"));

    let ir = fs::read_to_string(tmp.path().join("out/server/ir.json")).expect("ir.json");
    assert!(ir.contains("CreateUserRequest"));
    assert!(ir.contains("CreateUserRequestBody"));
    assert!(ir.contains("CreateUser201Response"));

    let value: serde_json::Value = serde_json::from_str(&ir).expect("valid JSON");
    assert_eq!(value["target"], "go");
}

#[test]
fn generate_invalid_spec_exits_nonzero_with_path() {
    let tmp = TempDir::new().expect("tempdir");
    let config = write_config(
        tmp.path(),
        r#"
goServer:
  outputDir: out/server
  packageName: api
spec:
  apiName: Broken
  version: "1"
  endpoints:
    Create:
      method: POST
      path: /create
      requestBody:
        properties:
          age:
            type: number
            required: true
            nonEmpty: true
"#,
    );

    apiforge()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("endpoint Create"))
        .stderr(contains("nonEmpty is only applicable"));
}

#[test]
fn generate_missing_config_file_exits_nonzero() {
    apiforge()
        .args(["--config", "this-file-does-not-exist.yaml"])
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}

#[test]
fn generate_without_targets_exits_nonzero() {
    let tmp = TempDir::new().expect("tempdir");
    let config = write_config(
        tmp.path(),
        r#"
spec:
  apiName: Test
  version: "1"
"#,
    );

    apiforge()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("at least one of goServer, goSdk, or tsSdk"));
}
