// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dinner-core: the dining philosophers simulation
//!
//! This crate provides:
//! - Forks: blocking mutual-exclusion resources shared by neighbours
//! - Philosophers: think/dine state machines with deadlock-free fork ordering
//! - The simulation coordinator that runs, stops, and reports on a table
//! - Configuration loading and transition event sinks

pub mod clock;
pub mod config;
pub mod events;
pub mod fork;
pub mod id;
pub mod philosopher;
pub mod report;
pub mod simulation;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{
    ConfigError, DelayRange, SimulationConfig, MAX_PHILOSOPHERS, MIN_PHILOSOPHERS,
};
pub use events::{ConsoleSink, Event, EventRecord, EventSink, NullSink, RecordingSink, Side};
pub use fork::{Fork, ForkError, ForkState};
pub use id::{ForkId, PhilosopherId};
pub use philosopher::{Philosopher, PhilosopherState, PhilosopherStats, StopHandle};
pub use report::{PhilosopherReport, SimulationReport};
pub use simulation::{Interrupt, Simulation, SimulationError};
