//! Word-building engine
//!
//! All gameplay rules live here. Nothing in this module renders, plays
//! sound or touches storage:
//! - Seeded RNG only (pool dealing and shuffling)
//! - Time advances only through explicit ticks
//! - One round and one level owner at a time

pub mod level;
pub mod round;
pub mod state;
pub mod timer;

pub use level::{Advance, LevelAttempt, LevelEngine, LevelPhase};
pub use round::deal_pool;
pub use state::{Difficulty, GameMode, Level, RoundOutcome, RoundState, Word};
pub use timer::{RoundTimer, TickOutcome, TimerHandle};
