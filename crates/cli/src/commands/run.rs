// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dinner run` - Seat the table and run a simulation

use anyhow::{Context, Result};
use clap::Args;
use dinner_core::{ConsoleSink, EventSink, Simulation, SimulationConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::error::CliError;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct RunArgs {
    /// Config file (defaults to ./dinner.toml when present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of philosophers at the table
    #[arg(long, short = 'n')]
    pub philosophers: Option<usize>,

    /// How long to run (e.g. "2s", "500ms")
    #[arg(long, short = 'd', value_parser = humantime::parse_duration)]
    pub duration: Option<Duration>,

    /// Print every state transition
    #[arg(long)]
    pub debug: bool,

    /// Seed the delay generators for a repeatable schedule
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format for the results
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl RunArgs {
    /// Layer command-line flags over the loaded config
    pub fn apply(&self, mut config: SimulationConfig) -> SimulationConfig {
        if let Some(count) = self.philosophers {
            config.philosophers_count = count;
        }
        if let Some(duration) = self.duration {
            config = config.with_duration(duration);
        }
        if self.debug {
            config = config.with_debug(true);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

pub fn handle(args: RunArgs) -> Result<()> {
    let config = args.apply(super::load_config(args.config.as_deref())?);

    let mut simulation = Simulation::new(config.clone())
        .map_err(|e| CliError::config(e, args.config.as_deref()))?;
    if let Some(sink) = trace_sink(&config, args.format) {
        simulation = simulation.with_sink(sink);
    }

    let interrupt = simulation.interrupt_handle();
    ctrlc::set_handler(move || interrupt.trigger()).context("failed to install Ctrl-C handler")?;

    if args.format == OutputFormat::Text {
        println!("{}", header(&config));
    }

    let report = simulation.run()?;
    output::print(&report, args.format)?;
    Ok(())
}

/// Keep stdout a single JSON document by moving debug trace lines to stderr
fn trace_sink(config: &SimulationConfig, format: OutputFormat) -> Option<Arc<dyn EventSink>> {
    if !config.debug_mode || format != OutputFormat::Json {
        return None;
    }
    let sink: Arc<dyn EventSink> = Arc::new(ConsoleSink::new(std::io::stderr()));
    Some(sink)
}

fn header(config: &SimulationConfig) -> String {
    format!(
        "Dining philosophers: {} philosophers, {} ms, debug {}\n",
        config.philosophers_count,
        config.simulation_duration_ms,
        if config.debug_mode { "on" } else { "off" }
    )
}
