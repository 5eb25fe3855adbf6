//! Simulation run specs
//!
//! Verify the header, the results table, JSON output, and debug tracing.

use crate::prelude::*;

#[test]
fn run_prints_header_and_results_table() {
    let project = Project::empty();
    project.file("dinner.toml", QUICK_CONFIG);

    project
        .dinner()
        .args(&["run"])
        .passes()
        .stdout_has("Dining philosophers: 3 philosophers, 200 ms, debug off")
        .stdout_has("Simulation results:")
        .stdout_has("PHILOSOPHER  MEALS    WAIT")
        .stdout_has("Total meals:")
        .stdout_lacks("Philosopher 1 is thinking.");
}

#[test]
fn flags_override_config_file() {
    let project = Project::empty();
    project.file("dinner.toml", QUICK_CONFIG);

    project
        .dinner()
        .args(&["run", "--philosophers", "4", "--duration", "100ms"])
        .passes()
        .stdout_has("Dining philosophers: 4 philosophers, 100 ms, debug off");
}

#[test]
fn json_report_lists_every_philosopher_in_order() {
    let project = Project::empty();
    project.file("dinner.toml", QUICK_CONFIG);

    let outcome = project
        .dinner()
        .args(&["run", "--format", "json", "--philosophers", "5"])
        .passes();

    let json = outcome.stdout_json();
    assert_eq!(json["duration_ms"], 200);
    assert_eq!(json["interrupted"], false);

    let philosophers = json["philosophers"].as_array().unwrap();
    let ids: Vec<u64> = philosophers
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    for p in philosophers {
        assert!(p["meals_consumed"].is_u64());
        assert!(p["total_wait_ms"].as_f64().unwrap() >= 0.0);
    }
}

#[test]
fn two_philosophers_with_zero_duration_finish() {
    let outcome = Project::empty()
        .dinner()
        .args(&["run", "-n", "2", "-d", "0s", "-o", "json"])
        .passes();

    let json = outcome.stdout_json();
    let philosophers = json["philosophers"].as_array().unwrap();
    assert_eq!(philosophers.len(), 2);
    assert!(philosophers
        .iter()
        .all(|p| p["meals_consumed"].as_u64().unwrap() == 0));
}

#[test]
fn debug_mode_traces_transitions() {
    let project = Project::empty();
    project.file("dinner.toml", QUICK_CONFIG);

    project
        .dinner()
        .args(&["run", "--debug"])
        .passes()
        .stdout_has("debug on")
        .stdout_has("is thinking.")
        .stdout_has("is hungry.")
        .stdout_has("picked up")
        .stdout_has("starts eating")
        .stdout_has("put down");
}

#[test]
fn debug_trace_stays_out_of_json_output() {
    let project = Project::empty();
    project.file("dinner.toml", QUICK_CONFIG);

    let outcome = project
        .dinner()
        .args(&["run", "--debug", "--format", "json"])
        .passes()
        .stderr_has("is thinking.")
        .stdout_lacks("Philosopher 1");

    let json = outcome.stdout_json();
    assert_eq!(json["philosophers"].as_array().unwrap().len(), 3);
}

#[test]
fn log_file_receives_lifecycle_logs() {
    let project = Project::empty();
    project.file("dinner.toml", QUICK_CONFIG);

    project
        .dinner()
        .env("RUST_LOG", "dinner_core=info")
        .args(&["--log-file", "logs/dinner.log", "run"])
        .passes();

    let log = std::fs::read_to_string(project.path().join("logs/dinner.log")).unwrap();
    assert!(log.contains("starting simulation"), "log was:\n{}", log);
    assert!(log.contains("simulation finished"), "log was:\n{}", log);
}
