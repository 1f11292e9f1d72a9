//! Runs the `verbump` binary the way a CI step would.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// A `verbump` command that doesn't see any inputs from the surrounding environment.
fn verbump() -> Command {
    let mut cmd = Command::cargo_bin("verbump").unwrap();
    for var in ["INPUT_VERSION", "INPUT_BUMP", "INPUT_FORMAT", "GITHUB_OUTPUT", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_bump_from_args() {
    verbump()
        .args(["--version", "1.2.3", "--bump", "minor"])
        .assert()
        .success()
        .stdout("1.3.0\n");
}

#[test]
fn test_bump_from_env() {
    let output = NamedTempFile::new().unwrap();

    verbump()
        .env("INPUT_VERSION", "1.2")
        .env("INPUT_BUMP", "revision")
        .env("INPUT_FORMAT", "")
        .env("GITHUB_OUTPUT", output.path())
        .assert()
        .success()
        .stdout("1.2.0.1\n");

    assert_eq!(
        "version=1.2.0.1\n",
        fs::read_to_string(output.path()).unwrap()
    );
}

#[test]
fn test_format_overrides_inference() {
    verbump()
        .args(["-v", "1.2.3", "-b", "major", "-f", "a.b.c.d"])
        .assert()
        .success()
        .stdout("2.0.0.0\n");
}

#[test]
fn test_invalid_bump_fails_step() {
    verbump()
        .args(["--version", "1.2.3", "--bump", "invalid"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("::error::bump must be either"))
        .stderr(predicate::str::contains("'revision'"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_missing_version_fails_step() {
    verbump()
        .env("INPUT_VERSION", "")
        .args(["--bump", "patch"])
        .assert()
        .failure()
        .code(1)
        .stdout("::error::Input required and not supplied: version\n");
}

#[test]
fn test_non_numeric_component_fails_step() {
    let output = NamedTempFile::new().unwrap();

    verbump()
        .args(["--version", "1.x.3", "--bump", "patch", "--output-file"])
        .arg(output.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("version component 'x' at position 1"));

    assert_eq!("", fs::read_to_string(output.path()).unwrap());
}

#[test]
fn test_version_flag_bumps_and_sets_output() {
    let output = NamedTempFile::new().unwrap();

    verbump()
        .args(["--version", "1.2.3", "--bump", "patch", "--output-file"])
        .arg(output.path())
        .assert()
        .success()
        .stdout("1.2.4\n");

    assert_eq!("version=1.2.4\n", fs::read_to_string(output.path()).unwrap());
}

#[test]
fn test_version_flag_without_value_fails() {
    verbump()
        .args(["--bump", "patch", "--version"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("verbump 0.1.0").not());
}
