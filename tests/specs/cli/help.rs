//! CLI help specs
//!
//! Verify help output lists the commands and options.

use crate::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    Command::cargo_bin("dinner")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn run_help_lists_overrides() {
    Project::empty()
        .dinner()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--philosophers")
        .stdout_has("--duration")
        .stdout_has("--debug")
        .stdout_has("--seed")
        .stdout_has("--format");
}

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("dinner")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dinner "));
}
