// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dinner - Dining philosophers simulation CLI

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, run};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;

use crate::error::CliError;

#[derive(Parser)]
#[command(
    name = "dinner",
    version,
    about = "Dining philosophers - a deadlock-free concurrency simulation"
)]
struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print per-philosopher results
    Run(run::RunArgs),
    /// Validate a config file and print the effective values
    Check(check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_guard = match setup_logging(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: failed to set up logging: {:#}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run(args) => run::handle(args),
        Commands::Check(args) => check::handle(args),
    };

    if let Err(e) = result {
        report_error(&e);
        drop(log_guard);
        std::process::exit(1);
    }
}

fn report_error(err: &anyhow::Error) {
    tracing::error!(error = %err, "command failed");
    match err.downcast_ref::<CliError>() {
        Some(cli_err) => eprint!("{}", cli_err),
        None => eprintln!("error: {:#}", err),
    }
}

/// Install the tracing subscriber, to `log_file` when given and stderr otherwise
///
/// The returned guard must be held until exit so buffered file logs are flushed.
fn setup_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path has no file name: {}", path.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(Some(guard))
}
