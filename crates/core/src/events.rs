// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Philosopher transition events and the sinks that receive them
//!
//! Every state change of a philosopher is published as an [`Event`]. Debug
//! mode routes them to a [`ConsoleSink`]; tests use a [`RecordingSink`] to
//! check mutual exclusion and wait accounting after the fact.

use crate::id::{ForkId, PhilosopherId};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

/// Which of a philosopher's two forks an event refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A philosopher state transition
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Entered the thinking phase
    Thinking,
    /// Finished thinking, now waiting for forks
    Hungry,
    /// Fork acquired; emitted while the fork is held
    PickedUp { fork: ForkId, side: Side },
    /// Both forks held, meal begins
    Dining { waited: Duration },
    /// About to release a fork; emitted while the fork is still held
    PutDown { fork: ForkId, side: Side },
    /// Left the loop after honoring a stop request
    Stopped { meals: u64 },
}

impl Event {
    /// Stable event name, e.g. `fork:picked_up`
    pub fn name(&self) -> &'static str {
        match self {
            Event::Thinking => "philosopher:thinking",
            Event::Hungry => "philosopher:hungry",
            Event::PickedUp { .. } => "fork:picked_up",
            Event::Dining { .. } => "philosopher:dining",
            Event::PutDown { .. } => "fork:put_down",
            Event::Stopped { .. } => "philosopher:stopped",
        }
    }

    /// Human-readable trace line for `philosopher`
    pub fn describe(&self, philosopher: PhilosopherId) -> String {
        match self {
            Event::Thinking => format!("Philosopher {} is thinking...", philosopher),
            Event::Hungry => format!("Philosopher {} is hungry.", philosopher),
            Event::PickedUp { fork, side } => {
                format!("Philosopher {} picked up {} fork {}.", philosopher, side, fork)
            }
            Event::Dining { waited } => format!(
                "Philosopher {} starts eating (waited {} ms).",
                philosopher,
                waited.as_millis()
            ),
            Event::PutDown { fork, side } => {
                format!("Philosopher {} put down {} fork {}.", philosopher, side, fork)
            }
            Event::Stopped { meals } => {
                format!("Philosopher {} stopped after {} meals.", philosopher, meals)
            }
        }
    }
}

/// Receives philosopher transitions from every philosopher thread
pub trait EventSink: Send + Sync {
    fn emit(&self, philosopher: PhilosopherId, event: &Event);
}

/// Discards every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _philosopher: PhilosopherId, _event: &Event) {}
}

/// Writes one trace line per event
pub struct ConsoleSink<W> {
    out: Mutex<W>,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> EventSink for ConsoleSink<W> {
    fn emit(&self, philosopher: PhilosopherId, event: &Event) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        // Trace output is best effort; a closed pipe must not stop the run
        let _ = writeln!(out, "{}", event.describe(philosopher));
    }
}

/// An event with its position in the global emission order
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// Monotonic sequence number, starting at 1
    pub sequence: u64,
    pub philosopher: PhilosopherId,
    pub event: Event,
}

/// Keeps every event in emission order
///
/// Records are appended under a single lock, so `sequence` is a total order
/// consistent with each fork's acquire/release history.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<EventRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far
    pub fn records(&self) -> Vec<EventRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Events emitted by one philosopher, in order
    pub fn events_for(&self, philosopher: PhilosopherId) -> Vec<Event> {
        self.records()
            .into_iter()
            .filter(|r| r.philosopher == philosopher)
            .map(|r| r.event)
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, philosopher: PhilosopherId, event: &Event) {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let sequence = records.len() as u64 + 1;
        records.push(EventRecord {
            sequence,
            philosopher,
            event: event.clone(),
        });
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
