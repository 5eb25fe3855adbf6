// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fork: exclusive resource shared by two neighbouring philosophers
//!
//! A fork is either free or held by exactly one philosopher. `acquire` blocks
//! until the fork is free; `release` must come from the current holder.

use crate::id::{ForkId, PhilosopherId};
use std::sync::{Condvar, Mutex};
use thiserror::Error;

/// Misuse of the acquire/release contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForkError {
    #[error("fork {fork} released by philosopher {caller} but it is not held")]
    NotHeld { fork: ForkId, caller: PhilosopherId },
    #[error("fork {fork} released by philosopher {caller} but it is held by {holder}")]
    HeldByOther {
        fork: ForkId,
        caller: PhilosopherId,
        holder: PhilosopherId,
    },
}

/// Fork state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForkState {
    /// Nobody holds the fork
    Free,
    /// Held by a philosopher
    Held(PhilosopherId),
}

/// A non-reentrant mutual-exclusion primitive
#[derive(Debug)]
pub struct Fork {
    id: ForkId,
    state: Mutex<ForkState>,
    released: Condvar,
}

impl Fork {
    pub fn new(id: ForkId) -> Self {
        Self {
            id,
            state: Mutex::new(ForkState::Free),
            released: Condvar::new(),
        }
    }

    pub fn id(&self) -> ForkId {
        self.id
    }

    /// Block until the fork is free, then take it for `holder`
    pub fn acquire(&self, holder: PhilosopherId) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        while let ForkState::Held(_) = *state {
            state = self
                .released
                .wait(state)
                .unwrap_or_else(|e| e.into_inner());
        }
        *state = ForkState::Held(holder);
    }

    /// Hand the fork back; only the current holder may do this
    pub fn release(&self, holder: PhilosopherId) -> Result<(), ForkError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match *state {
            ForkState::Held(current) if current == holder => {
                *state = ForkState::Free;
                drop(state);
                self.released.notify_one();
                Ok(())
            }
            ForkState::Held(current) => Err(ForkError::HeldByOther {
                fork: self.id,
                caller: holder,
                holder: current,
            }),
            ForkState::Free => Err(ForkError::NotHeld {
                fork: self.id,
                caller: holder,
            }),
        }
    }

    pub fn state(&self) -> ForkState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Check if the fork is currently free
    pub fn is_free(&self) -> bool {
        self.state() == ForkState::Free
    }

    /// Get the current holder, if any
    pub fn holder(&self) -> Option<PhilosopherId> {
        match self.state() {
            ForkState::Free => None,
            ForkState::Held(holder) => Some(holder),
        }
    }
}

#[cfg(test)]
#[path = "fork_tests.rs"]
mod tests;
