// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use dinner_core::{ConfigError, MAX_PHILOSOPHERS, MIN_PHILOSOPHERS};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Underlying error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Wrap a configuration failure, optionally naming the file it came from
    pub fn config(err: ConfigError, path: Option<&Path>) -> Self {
        let mut cli_err = match &err {
            ConfigError::TooFewPhilosophers(count) => {
                CliError::new(format!("cannot seat {} philosopher(s)", count))
                    .with_context(format!(
                        "a table needs at least {} philosophers so every fork is shared",
                        MIN_PHILOSOPHERS
                    ))
                    .with_suggestion(format!(
                        "Pass a larger table: dinner run --philosophers {}",
                        MIN_PHILOSOPHERS.max(5)
                    ))
            }
            ConfigError::TooManyPhilosophers(count) => {
                CliError::new(format!("cannot seat {} philosophers", count))
                    .with_context(format!(
                        "each philosopher runs on its own thread; the limit is {}",
                        MAX_PHILOSOPHERS
                    ))
                    .with_suggestion("Use a smaller table with --philosophers")
            }
            ConfigError::InvalidDelayRange { name, min, max } => {
                CliError::new(format!("invalid {} range", name))
                    .with_context(format!("min is {} ms but max is {} ms", min, max))
                    .with_suggestion(format!("Set {}.min to a value no greater than {}", name, max))
            }
            ConfigError::Read { path, .. } => {
                CliError::new(format!("cannot read config file {}", path.display()))
                    .with_suggestion("Check the path passed to --config")
            }
            ConfigError::Parse(_) => CliError::new("config file is not valid")
                .with_context(err.to_string())
                .with_suggestion("Check the configuration for typos: dinner check"),
        };
        if let Some(path) = path {
            cli_err = cli_err.with_context(format!("while loading {}", path.display()));
        }
        cli_err.with_source(err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
