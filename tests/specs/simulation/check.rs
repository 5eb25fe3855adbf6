//! Config check specs
//!
//! `dinner check` prints the effective configuration as TOML.

use crate::prelude::*;

#[test]
fn check_without_config_prints_defaults() {
    Project::empty()
        .dinner()
        .args(&["check"])
        .passes()
        .stdout_has("philosophers_count = 5")
        .stdout_has("debug_mode = false")
        .stdout_has("simulation_duration_ms = 2000")
        .stdout_has("[think_delay_ms]")
        .stdout_has("[eat_delay_ms]")
        .stdout_lacks("seed");
}

#[test]
fn check_picks_up_dinner_toml_from_working_directory() {
    let project = Project::empty();
    project.file("dinner.toml", QUICK_CONFIG);

    project
        .dinner()
        .args(&["check"])
        .passes()
        .stdout_has("philosophers_count = 3")
        .stdout_has("simulation_duration_ms = 200")
        .stdout_has("seed = 7");
}

#[test]
fn check_reads_explicit_config_path() {
    let project = Project::empty();
    project.file("conf/big.toml", "philosophers_count = 12\n");
    let path = project.path().join("conf/big.toml");

    project
        .dinner()
        .args(&["check", "--config", path.to_str().unwrap()])
        .passes()
        .stdout_has("philosophers_count = 12");
}
