// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod run;

use crate::error::CliError;
use dinner_core::SimulationConfig;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "dinner.toml";

/// Resolve the config file to read, if any
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}

/// Load the effective base configuration before any flag overrides
pub fn load_config(explicit: Option<&Path>) -> Result<SimulationConfig, CliError> {
    match config_path(explicit) {
        Some(path) => {
            SimulationConfig::load(&path).map_err(|e| CliError::config(e, Some(&path)))
        }
        None => Ok(SimulationConfig::default()),
    }
}
