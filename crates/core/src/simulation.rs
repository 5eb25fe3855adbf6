// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation coordinator
//!
//! Builds the ring of forks and philosophers, runs one thread per
//! philosopher for the configured duration, then stops and joins them all
//! and collects their statistics.

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, SimulationConfig};
use crate::events::{ConsoleSink, EventSink, NullSink};
use crate::fork::{Fork, ForkError};
use crate::id::{ForkId, PhilosopherId};
use crate::philosopher::{Philosopher, PhilosopherStats, StopHandle};
use crate::report::{PhilosopherReport, SimulationReport};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that end a simulation run
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("fork misuse: {0}")]
    ForkMisuse(#[from] ForkError),
    #[error("fork {fork} still held by philosopher {holder} after shutdown")]
    ForkStillHeld {
        fork: ForkId,
        holder: PhilosopherId,
    },
    #[error("failed to spawn thread for philosopher {id}: {source}")]
    Spawn {
        id: PhilosopherId,
        #[source]
        source: std::io::Error,
    },
    #[error("philosopher {0} panicked")]
    PhilosopherPanicked(PhilosopherId),
}

/// Ends the coordinator's timed wait early
///
/// Cloneable and safe to trigger from a signal handler thread.
#[derive(Clone, Debug, Default)]
pub struct Interrupt {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        let (triggered, cvar) = &*self.inner;
        *triggered.lock().unwrap_or_else(|e| e.into_inner()) = true;
        cvar.notify_all();
    }

    pub fn is_triggered(&self) -> bool {
        let (triggered, _) = &*self.inner;
        *triggered.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Wait up to `timeout`; returns true if triggered
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let (triggered, cvar) = &*self.inner;
        let guard = triggered.lock().unwrap_or_else(|e| e.into_inner());
        let (guard, _) = cvar
            .wait_timeout_while(guard, timeout, |triggered| !*triggered)
            .unwrap_or_else(|e| e.into_inner());
        *guard
    }
}

/// A philosopher thread and the flag that stops it
struct Running {
    id: PhilosopherId,
    stop: StopHandle,
    handle: JoinHandle<Result<PhilosopherStats, ForkError>>,
}

/// One run of the dining philosophers
pub struct Simulation<C: Clock = SystemClock> {
    config: SimulationConfig,
    forks: Vec<Arc<Fork>>,
    philosophers: Vec<Philosopher<C>>,
    interrupt: Interrupt,
}

impl Simulation<SystemClock> {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Simulation<C> {
    /// Validate `config` and seat the philosophers around the table
    ///
    /// Philosopher `i` (zero-based) gets fork `(i + 1) % n` on the left and
    /// fork `i` on the right. Nothing is allocated if validation fails.
    pub fn with_clock(config: SimulationConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;

        let sink: Arc<dyn EventSink> = if config.debug_mode {
            Arc::new(ConsoleSink::stdout())
        } else {
            Arc::new(NullSink)
        };

        let count = config.philosophers_count;
        let forks: Vec<Arc<Fork>> = (0..count)
            .map(|i| Arc::new(Fork::new(ForkId(i))))
            .collect();

        let philosophers = (0..count)
            .map(|i| {
                let id = PhilosopherId::from_index(i);
                let left = Arc::clone(&forks[(i + 1) % count]);
                let right = Arc::clone(&forks[i]);
                let philosopher = Philosopher::new(id, left, right, clock.clone())
                    .with_delays(config.think_delay_ms, config.eat_delay_ms)
                    .with_sink(Arc::clone(&sink));
                match config.seed {
                    Some(seed) => philosopher.with_seed(seed.wrapping_add(u64::from(id.0))),
                    None => philosopher,
                }
            })
            .collect();

        Ok(Self {
            config,
            forks,
            philosophers,
            interrupt: Interrupt::new(),
        })
    }

    /// Route every philosopher's transitions to `sink`
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.philosophers = self
            .philosophers
            .into_iter()
            .map(|p| p.with_sink(Arc::clone(&sink)))
            .collect();
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn forks(&self) -> &[Arc<Fork>] {
        &self.forks
    }

    pub fn philosophers(&self) -> &[Philosopher<C>] {
        &self.philosophers
    }

    /// Handle that cuts the timed wait short when triggered
    pub fn interrupt_handle(&self) -> Interrupt {
        self.interrupt.clone()
    }

    /// Run to completion and report per-philosopher statistics
    pub fn run(self) -> Result<SimulationReport, SimulationError> {
        let Simulation {
            config,
            forks,
            philosophers,
            interrupt,
        } = self;

        info!(
            philosophers = config.philosophers_count,
            duration_ms = config.simulation_duration_ms,
            debug = config.debug_mode,
            "starting simulation"
        );
        let started = Instant::now();

        let mut running = Vec::with_capacity(philosophers.len());
        for philosopher in philosophers {
            let id = philosopher.id();
            let stop = philosopher.stop_handle();
            let spawned = thread::Builder::new()
                .name(format!("philosopher-{}", id))
                .spawn(move || philosopher.run());

            match spawned {
                Ok(handle) => {
                    debug!(philosopher = %id, "spawned");
                    running.push(Running { id, stop, handle });
                }
                Err(source) => {
                    error!(philosopher = %id, error = %source, "spawn failed, stopping table");
                    abort_table(running);
                    return Err(SimulationError::Spawn { id, source });
                }
            }
        }

        let interrupted = interrupt.wait_timeout(config.duration());
        if interrupted {
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "simulation interrupted"
            );
        }

        let mut philosophers = stop_and_join(running)?;
        philosophers.sort_by_key(|p| p.id);

        if let Some(fork) = forks.iter().find(|f| !f.is_free()) {
            if let Some(holder) = fork.holder() {
                return Err(SimulationError::ForkStillHeld {
                    fork: fork.id(),
                    holder,
                });
            }
        }

        let report = SimulationReport {
            duration_ms: config.simulation_duration_ms,
            elapsed_ms: started.elapsed().as_millis() as u64,
            interrupted,
            philosophers,
        };
        info!(
            total_meals = report.total_meals(),
            elapsed_ms = report.elapsed_ms,
            "simulation finished"
        );
        Ok(report)
    }
}

/// Stop and join philosophers already running when the table cannot be completed
///
/// The spawn failure is what gets reported, so a failure here is only logged.
fn abort_table(running: Vec<Running>) {
    if let Err(e) = stop_and_join(running) {
        error!(error = %e, "philosopher failed while the table was being torn down");
    }
}

/// Raise every stop flag, then join every thread
///
/// All threads are joined even when one of them failed; the first failure is
/// returned.
fn stop_and_join(running: Vec<Running>) -> Result<Vec<PhilosopherReport>, SimulationError> {
    for r in &running {
        r.stop.request_stop();
    }

    let mut reports = Vec::with_capacity(running.len());
    let mut failure = None;
    for Running { id, handle, .. } in running {
        match handle.join() {
            Ok(Ok(stats)) => {
                debug!(philosopher = %id, meals = stats.meals_consumed, "joined");
                reports.push(PhilosopherReport::new(id, stats));
            }
            Ok(Err(e)) => {
                error!(philosopher = %id, error = %e, "philosopher misused a fork");
                failure.get_or_insert(SimulationError::ForkMisuse(e));
            }
            Err(_) => {
                error!(philosopher = %id, "philosopher thread panicked");
                failure.get_or_insert(SimulationError::PhilosopherPanicked(id));
            }
        }
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(reports),
    }
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod tests;
