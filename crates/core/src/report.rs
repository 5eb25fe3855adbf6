// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-philosopher results of a finished run

use crate::id::PhilosopherId;
use crate::philosopher::PhilosopherStats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistics for one philosopher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhilosopherReport {
    pub id: u32,
    pub meals_consumed: u64,
    /// Cumulative time spent hungry, in milliseconds
    pub total_wait_ms: f64,
}

impl PhilosopherReport {
    pub fn new(id: PhilosopherId, stats: PhilosopherStats) -> Self {
        Self {
            id: id.0,
            meals_consumed: stats.meals_consumed,
            total_wait_ms: stats.total_wait_ms(),
        }
    }
}

/// Outcome of one simulation run, philosophers in ascending id order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Configured run length
    pub duration_ms: u64,
    /// Measured time from first spawn to last join
    pub elapsed_ms: u64,
    /// Whether the run was cut short by an interrupt
    pub interrupted: bool,
    pub philosophers: Vec<PhilosopherReport>,
}

impl SimulationReport {
    pub fn get(&self, id: PhilosopherId) -> Option<&PhilosopherReport> {
        self.philosophers.iter().find(|p| p.id == id.0)
    }

    pub fn total_meals(&self) -> u64 {
        self.philosophers.iter().map(|p| p.meals_consumed).sum()
    }

    pub fn min_meals(&self) -> u64 {
        self.philosophers
            .iter()
            .map(|p| p.meals_consumed)
            .min()
            .unwrap_or(0)
    }

    pub fn max_meals(&self) -> u64 {
        self.philosophers
            .iter()
            .map(|p| p.meals_consumed)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation results:")?;
        writeln!(f, "{:<12} {:<8} WAIT", "PHILOSOPHER", "MEALS")?;
        for p in &self.philosophers {
            writeln!(
                f,
                "{:<12} {:<8} {:.0} ms",
                p.id, p.meals_consumed, p.total_wait_ms
            )?;
        }
        writeln!(f)?;
        write!(
            f,
            "Total meals: {} (min {}, max {})",
            self.total_meals(),
            self.min_meals(),
            self.max_meals()
        )?;
        if self.interrupted {
            write!(f, "\nInterrupted after {} ms", self.elapsed_ms)?;
        }
        Ok(())
    }
}
