// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dinner check` - Validate a config and print the effective values

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::error::CliError;

#[derive(Args)]
pub struct CheckArgs {
    /// Config file (defaults to ./dinner.toml when present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

pub fn handle(args: CheckArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    config
        .validate()
        .map_err(|e| CliError::config(e, args.config.as_deref()))?;

    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
