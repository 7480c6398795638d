//! Word Builder - a vocabulary word-building game
//!
//! Core modules:
//! - `engine`: Round and level rules (letter pools, scoring, countdown)
//! - `progress`: Persistent cross-session progress
//! - `session`: Screen state machine wiring player actions to the engine
//! - `content`: Level catalog
//! - `persistence` / `platform`: Key-value storage backends
//! - `audio`: Feedback notifications

pub mod audio;
pub mod content;
pub mod engine;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod progress;
pub mod session;
pub mod settings;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use content::{BuiltinCatalog, ContentProvider};
pub use engine::{Difficulty, GameMode, LevelEngine, RoundState};
pub use progress::{ProgressRecord, ProgressTracker, UserData};
pub use session::{Screen, SessionController};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Hints available across the words of one level
    pub const HINTS_PER_LEVEL: u32 = 3;
    /// A correct answer on this word (1-based) or later wins the level
    pub const REQUIRED_CORRECT_WORDS: usize = 4;
    /// Countdown resolution, seconds per tick
    pub const TICK_SECONDS: u64 = 1;

    /// Storage keys
    pub const PROGRESS_KEY: &str = "word_builder_progress";
    pub const SETTINGS_KEY: &str = "word_builder_settings";
}
