//! Round countdown scheduling
//!
//! The host calls back once per second with the handle it was given when the
//! countdown was armed. Every arm or cancel bumps the generation, so a
//! callback left over from a replaced or resolved round no longer matches
//! and is dropped.

use serde::{Deserialize, Serialize};

/// Token for one armed countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle {
    owner: u64,
    generation: u64,
}

impl TimerHandle {
    pub fn owner(&self) -> u64 {
        self.owner
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Generation-checked countdown owned by the level engine
///
/// `owner` tells apart timers of successive level engines, whose
/// generations both start from zero.
#[derive(Debug, Clone, Default)]
pub struct RoundTimer {
    owner: u64,
    generation: u64,
    armed: bool,
}

impl RoundTimer {
    pub fn new(owner: u64) -> Self {
        Self {
            owner,
            ..Self::default()
        }
    }

    /// Start (or restart) the countdown; earlier handles go stale
    pub fn arm(&mut self) -> TimerHandle {
        self.generation += 1;
        self.armed = true;
        TimerHandle {
            owner: self.owner,
            generation: self.generation,
        }
    }

    /// Stop the countdown; every outstanding handle goes stale
    pub fn cancel(&mut self) {
        if self.armed {
            self.generation += 1;
            self.armed = false;
        }
    }

    /// Handle for the live countdown, if any
    pub fn handle(&self) -> Option<TimerHandle> {
        self.armed.then_some(TimerHandle {
            owner: self.owner,
            generation: self.generation,
        })
    }

    /// Whether a callback carrying `handle` may still touch the round
    pub fn accepts(&self, handle: TimerHandle) -> bool {
        self.armed && handle.owner == self.owner && handle.generation == self.generation
    }
}

/// What a tick callback did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome<T> {
    /// Stale or cancelled handle; nothing changed
    Ignored,
    /// Clock still running
    Running { remaining: u32 },
    /// Clock hit zero and the round was resolved as incorrect
    Expired(T),
}
