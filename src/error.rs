//! Error types for the word builder.
//!
//! None of these are fatal to a running session: round and session errors
//! describe a rejected action, persistence errors are logged and swallowed
//! at the tracker/settings boundary.

use thiserror::Error;

use crate::engine::Difficulty;
use crate::session::Screen;

/// Rejected round action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("no letter at index {index} (container holds {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("nothing selected to check")]
    EmptySelection,

    #[error("round already resolved")]
    Resolved,

    #[error("round not started yet")]
    NotStarted,
}

/// Unrecognised name for a difficulty or game mode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    #[error("unknown game mode '{0}'")]
    UnknownGameMode(String),
}

/// Key-value store failure
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure while persisting or restoring a record
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Registration form rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("name must be at least 2 characters")]
    NameTooShort,

    #[error("age must be a number between 1-99")]
    InvalidAge,

    #[error("invalid email address")]
    InvalidEmail,
}

/// Rejected session action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("action needs the {expected:?} screen, currently on {actual:?}")]
    WrongScreen { expected: Screen, actual: Screen },

    #[error("level {level} is locked on {}", difficulty.as_str())]
    LevelLocked { difficulty: Difficulty, level: u32 },

    #[error("no level in progress")]
    NoActiveLevel,

    #[error("level {0} has no words")]
    EmptyLevel(u32),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Round(#[from] RoundError),
}
