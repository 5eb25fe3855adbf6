//! CLI error specs
//!
//! Configuration failures exit non-zero with context and suggestions.

use crate::prelude::*;

#[test]
fn one_philosopher_is_rejected() {
    Project::empty()
        .dinner()
        .args(&["run", "--philosophers", "1"])
        .fails()
        .stderr_has("error: cannot seat 1 philosopher(s)")
        .stderr_has("at least 2 philosophers")
        .stderr_has("suggestions:")
        .stdout_lacks("Simulation results:");
}

#[test]
fn inverted_delay_range_is_rejected() {
    let project = Project::empty();
    project.file(
        "table.toml",
        "[eat_delay_ms]\nmin = 200\nmax = 100\n",
    );

    project
        .dinner()
        .args(&["run", "--config", "table.toml"])
        .fails()
        .stderr_has("invalid eat_delay_ms range")
        .stderr_has("while loading table.toml");
}

#[test]
fn unknown_config_key_is_rejected() {
    let project = Project::empty();
    project.file("dinner.toml", "philosophers = 5\n");

    project
        .dinner()
        .args(&["check"])
        .fails()
        .stderr_has("config file is not valid")
        .stderr_has("unknown field");
}

#[test]
fn missing_config_file_is_reported() {
    Project::empty()
        .dinner()
        .args(&["run", "--config", "nope.toml"])
        .fails()
        .stderr_has("cannot read config file nope.toml");
}

#[test]
fn malformed_duration_is_a_usage_error() {
    Project::empty()
        .dinner()
        .args(&["run", "--duration", "soon"])
        .fails()
        .stderr_has("--duration");
}
