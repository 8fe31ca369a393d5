//! End-to-end tests for the `generate` and `check` commands
//!
//! These tests invoke the actual CLI binary and validate its behavior
//! from a user's perspective.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Test that --help flag shows help information
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_help() {
    let mut cmd = cargo_bin_cmd!("unitygen");

    cmd.arg("generate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate unity files from the given source file globs",
        ));
}

/// Test that missing config file produces an error
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_missing_config() {
    let mut cmd = cargo_bin_cmd!("unitygen");

    cmd.arg("generate")
        .arg("--config")
        .arg("/nonexistent/config.yaml")
        .arg("*.cpp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

/// Test generating unity files end to end
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_writes_unity_files() {
    let temp = assert_fs::TempDir::new().unwrap();

    temp.child("A.cpp").write_str(&"x".repeat(500)).unwrap();
    temp.child("B.cpp").write_str(&"x".repeat(500)).unwrap();
    temp.child("C.cpp").write_str(&"x".repeat(500)).unwrap();

    let config_file = temp.child(".unitygen.yaml");
    config_file
        .write_str(
            r#"
base_name: Foo
bytes_per_unity_file: 1000
output_directory: unity
"#,
        )
        .unwrap();

    let mut cmd = cargo_bin_cmd!("unitygen");

    cmd.current_dir(temp.path())
        .arg("generate")
        .arg("*.cpp")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 unity file(s)"));

    temp.child("unity/Module.Foo.1_of_2.cpp")
        .assert(predicate::path::exists());
    temp.child("unity/Module.Foo.2_of_2.cpp")
        .assert(predicate::path::exists());
}

/// Test that --dry-run reports without writing anything
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_dry_run_writes_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();

    temp.child("A.cpp").write_str("int a;").unwrap();
    temp.child(".unitygen.yaml")
        .write_str("base_name: Foo\noutput_directory: unity\n")
        .unwrap();

    let mut cmd = cargo_bin_cmd!("unitygen");

    cmd.current_dir(temp.path())
        .arg("generate")
        .arg("--dry-run")
        .arg("*.cpp")
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"));

    temp.child("unity/Module.Foo.cpp")
        .assert(predicate::path::missing());
}

/// Test that no matching sources is a success with zero outputs
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_no_matches_is_success() {
    let temp = assert_fs::TempDir::new().unwrap();

    temp.child(".unitygen.yaml")
        .write_str("base_name: Foo\n")
        .unwrap();

    let mut cmd = cargo_bin_cmd!("unitygen");

    cmd.current_dir(temp.path())
        .arg("generate")
        .arg("*.cpp")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to generate"));
}

/// Test that check reports the effective configuration
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_valid_config() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_file = temp.child(".unitygen.yaml");

    config_file
        .write_str(
            r#"
base_name: Engine
bytes_per_unity_file: 65536
pch_enabled: true
pch_header_path: Private/EnginePrivate.h
"#,
        )
        .unwrap();

    let mut cmd = cargo_bin_cmd!("unitygen");

    cmd.arg("check")
        .arg("--config")
        .arg(config_file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration loaded successfully"))
        .stdout(predicate::str::contains("base_name: Engine"))
        .stdout(predicate::str::contains("pch_header_path: Private/EnginePrivate.h"));
}

/// Test that check calls out a zero threshold
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_zero_threshold_note() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_file = temp.child(".unitygen.yaml");

    config_file
        .write_str("base_name: Foo\nbytes_per_unity_file: 0\n")
        .unwrap();

    let mut cmd = cargo_bin_cmd!("unitygen");

    cmd.arg("check")
        .arg("--config")
        .arg(config_file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "zero threshold always forces a single unity file",
        ));
}
