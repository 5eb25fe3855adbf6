// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation configuration
//!
//! Loaded from TOML; any key may be omitted and falls back to its default.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Smallest ring that gives every philosopher two distinct forks
pub const MIN_PHILOSOPHERS: usize = 2;

/// Largest table; every philosopher is an OS thread
pub const MAX_PHILOSOPHERS: usize = 10_000;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least 2 philosophers are required, got {0}")]
    TooFewPhilosophers(usize),
    #[error("at most 10000 philosophers are supported, got {0}")]
    TooManyPhilosophers(usize),
    #[error("invalid {name} range: min {min} ms is greater than max {max} ms")]
    InvalidDelayRange {
        name: &'static str,
        min: u64,
        max: u64,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Half-open delay interval `[min, max)` in milliseconds
///
/// `min == max` yields a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DelayRange {
    pub min: u64,
    pub max: u64,
}

impl DelayRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub const fn fixed(ms: u64) -> Self {
        Self { min: ms, max: ms }
    }

    /// Draw a delay uniformly from the range
    pub fn sample(&self, rng: &mut impl Rng) -> Duration {
        let ms = if self.min >= self.max {
            self.min
        } else {
            rng.gen_range(self.min..self.max)
        };
        Duration::from_millis(ms)
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidDelayRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::new(50, 150)
    }
}

/// Parameters of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of philosophers, and of forks
    pub philosophers_count: usize,
    /// Emit a trace line on every philosopher transition
    pub debug_mode: bool,
    /// Wall-clock length of the run
    pub simulation_duration_ms: u64,
    /// Seed for reproducible delays; each philosopher uses `seed + id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub think_delay_ms: DelayRange,
    pub eat_delay_ms: DelayRange,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            philosophers_count: 5,
            debug_mode: false,
            simulation_duration_ms: 2000,
            seed: None,
            think_delay_ms: DelayRange::default(),
            eat_delay_ms: DelayRange::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new(philosophers_count: usize) -> Self {
        Self {
            philosophers_count,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.simulation_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_think_delay(mut self, range: DelayRange) -> Self {
        self.think_delay_ms = range;
        self
    }

    pub fn with_eat_delay(mut self, range: DelayRange) -> Self {
        self.eat_delay_ms = range;
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.simulation_duration_ms)
    }

    /// Check the invariants a run depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.philosophers_count < MIN_PHILOSOPHERS {
            return Err(ConfigError::TooFewPhilosophers(self.philosophers_count));
        }
        if self.philosophers_count > MAX_PHILOSOPHERS {
            return Err(ConfigError::TooManyPhilosophers(self.philosophers_count));
        }
        self.think_delay_ms.validate("think_delay_ms")?;
        self.eat_delay_ms.validate("eat_delay_ms")?;
        Ok(())
    }

    /// Parse and validate TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
