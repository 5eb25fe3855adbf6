// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Philosopher state machine
//!
//! A philosopher loops `Thinking -> Hungry -> Dining -> Thinking` until its
//! stop flag is raised. The flag is only consulted while thinking (when the
//! phase begins and again when its delay ends), so a philosopher that is
//! hungry or dining always finishes the meal and puts both forks down before
//! it stops.
//!
//! Forks are picked up in ascending [`ForkId`] order and put down in reverse.
//! Every philosopher in the ring follows the same global order, so the
//! wait-for graph between philosophers cannot form a cycle.

use crate::clock::Clock;
use crate::config::DelayRange;
use crate::events::{Event, EventSink, NullSink, Side};
use crate::fork::{Fork, ForkError};
use crate::id::{ForkId, PhilosopherId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Philosopher lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhilosopherState {
    Thinking,
    Hungry,
    Dining,
    Stopped,
}

impl fmt::Display for PhilosopherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhilosopherState::Thinking => write!(f, "thinking"),
            PhilosopherState::Hungry => write!(f, "hungry"),
            PhilosopherState::Dining => write!(f, "dining"),
            PhilosopherState::Stopped => write!(f, "stopped"),
        }
    }
}

/// Stop flag shared between a philosopher and the coordinator
///
/// Raised once, never lowered.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Counters accumulated by one philosopher
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhilosopherStats {
    pub meals_consumed: u64,
    /// Sum over all meals of (dining start - hunger start)
    pub total_wait: Duration,
}

impl PhilosopherStats {
    pub fn total_wait_ms(&self) -> f64 {
        self.total_wait.as_secs_f64() * 1000.0
    }
}

/// One diner at the table
pub struct Philosopher<C: Clock> {
    id: PhilosopherId,
    left: Arc<Fork>,
    right: Arc<Fork>,
    stop: StopHandle,
    clock: C,
    rng: StdRng,
    think_delay: DelayRange,
    eat_delay: DelayRange,
    sink: Arc<dyn EventSink>,
    state: PhilosopherState,
    stats: PhilosopherStats,
}

impl<C: Clock> Philosopher<C> {
    pub fn new(id: PhilosopherId, left: Arc<Fork>, right: Arc<Fork>, clock: C) -> Self {
        Self {
            id,
            left,
            right,
            stop: StopHandle::new(),
            clock,
            rng: StdRng::from_entropy(),
            think_delay: DelayRange::default(),
            eat_delay: DelayRange::default(),
            sink: Arc::new(NullSink),
            state: PhilosopherState::Thinking,
            stats: PhilosopherStats::default(),
        }
    }

    pub fn with_delays(mut self, think: DelayRange, eat: DelayRange) -> Self {
        self.think_delay = think;
        self.eat_delay = eat;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the entropy-seeded generator with a reproducible one
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn id(&self) -> PhilosopherId {
        self.id
    }

    pub fn state(&self) -> PhilosopherState {
        self.state
    }

    pub fn stats(&self) -> PhilosopherStats {
        self.stats
    }

    pub fn left(&self) -> &Arc<Fork> {
        &self.left
    }

    pub fn right(&self) -> &Arc<Fork> {
        &self.right
    }

    /// Handle the coordinator uses to ask this philosopher to stop
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Fork ids in the order they are picked up
    pub fn acquisition_order(&self) -> [ForkId; 2] {
        let [(_, first), (_, second)] = self.ordered_forks();
        [first.id(), second.id()]
    }

    /// Run until stopped, returning the final counters
    pub fn run(mut self) -> Result<PhilosopherStats, ForkError> {
        tracing::debug!(philosopher = %self.id, "philosopher started");
        while self.step()? {}
        tracing::debug!(
            philosopher = %self.id,
            meals = self.stats.meals_consumed,
            wait_ms = self.stats.total_wait_ms(),
            "philosopher finished"
        );
        Ok(self.stats)
    }

    /// One think/dine cycle
    ///
    /// Returns `Ok(false)` once a pending stop request has been honored.
    pub fn step(&mut self) -> Result<bool, ForkError> {
        if self.stop_if_requested() {
            return Ok(false);
        }

        self.enter(PhilosopherState::Thinking, Event::Thinking);
        let delay = self.think_delay.sample(&mut self.rng);
        self.clock.sleep(delay);

        // Still thinking: a stop that arrived during the delay wins over hunger
        if self.stop_if_requested() {
            return Ok(false);
        }

        let hungry_since = self.clock.now();
        self.enter(PhilosopherState::Hungry, Event::Hungry);
        self.dine(hungry_since)?;
        Ok(true)
    }

    fn stop_if_requested(&mut self) -> bool {
        if !self.stop.is_stop_requested() {
            return false;
        }
        let meals = self.stats.meals_consumed;
        self.enter(PhilosopherState::Stopped, Event::Stopped { meals });
        true
    }

    fn dine(&mut self, hungry_since: Instant) -> Result<(), ForkError> {
        let forks = self.ordered_forks();

        for (side, fork) in &forks {
            fork.acquire(self.id);
            self.emit(Event::PickedUp {
                fork: fork.id(),
                side: *side,
            });
        }

        let waited = self.clock.now().saturating_duration_since(hungry_since);
        self.stats.total_wait += waited;
        self.enter(PhilosopherState::Dining, Event::Dining { waited });

        let delay = self.eat_delay.sample(&mut self.rng);
        self.clock.sleep(delay);
        self.stats.meals_consumed += 1;

        // Both forks are handed back even if one release is refused
        let mut failure = None;
        for (side, fork) in forks.iter().rev() {
            self.emit(Event::PutDown {
                fork: fork.id(),
                side: *side,
            });
            if let Err(e) = fork.release(self.id) {
                tracing::error!(philosopher = %self.id, error = %e, "fork release refused");
                failure.get_or_insert(e);
            }
        }
        self.state = PhilosopherState::Thinking;

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Both forks, lower id first
    fn ordered_forks(&self) -> [(Side, Arc<Fork>); 2] {
        let left = (Side::Left, Arc::clone(&self.left));
        let right = (Side::Right, Arc::clone(&self.right));
        if self.left.id() < self.right.id() {
            [left, right]
        } else {
            [right, left]
        }
    }

    fn enter(&mut self, state: PhilosopherState, event: Event) {
        self.state = state;
        self.emit(event);
    }

    fn emit(&self, event: Event) {
        tracing::trace!(philosopher = %self.id, event = event.name(), "transition");
        self.sink.emit(self.id, &event);
    }
}

#[cfg(test)]
#[path = "philosopher_tests.rs"]
mod tests;
