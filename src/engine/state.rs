//! Game state and core engine types
//!
//! Everything a round or level needs to be rebuilt or shown lives here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Difficulty tier, selected globally by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Countdown budget for one round, in seconds
    pub fn time_budget(&self) -> u32 {
        match self {
            Difficulty::Easy => 60,
            Difficulty::Medium => 45,
            Difficulty::Hard => 30,
        }
    }

    /// Random noise letters mixed into the pool
    pub fn extra_letters(&self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Points for a correct word before the time bonus
    pub fn base_score(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// How a level is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Level opens on its story; the clock waits for the player
    #[default]
    Story,
    /// Straight into the first word
    Practice,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Story => "story",
            GameMode::Practice => "practice",
        }
    }

}

impl FromStr for GameMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "story" => Ok(GameMode::Story),
            "practice" => Ok(GameMode::Practice),
            _ => Err(ParseError::UnknownGameMode(s.to_string())),
        }
    }
}

/// A target word with its clue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Lowercase alphabetic spelling
    pub word: String,
    pub hint: String,
    /// Illustration URI
    #[serde(default)]
    pub image: Option<String>,
}

impl Word {
    pub fn new(word: &str, hint: &str, image: Option<&str>) -> Self {
        Self {
            word: word.to_string(),
            hint: hint.to_string(),
            image: image.map(str::to_string),
        }
    }
}

/// A themed set of words with its narrative framing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub title: String,
    pub story: String,
    pub lesson: String,
    pub words: Vec<Word>,
}

/// Result of a round so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    #[default]
    Pending,
    Correct,
    Incorrect,
}

/// One attempt at building one word
///
/// `available` and `selected` together always hold exactly the letters of
/// `pool`; letters only ever move between the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    /// The word to build
    pub target: Word,
    /// Tier the round was started with (drives timer, scoring and stars)
    pub difficulty: Difficulty,
    /// Letters still in the pool, in display order
    pub available: Vec<char>,
    /// Letters picked so far; order is the attempted spelling
    pub selected: Vec<char>,
    /// Hints left for the rest of the level
    pub hints_remaining: u32,
    /// Countdown, whole seconds
    pub time_remaining: u32,
    pub outcome: RoundOutcome,
    /// The scrambled pool as dealt
    pub(crate) pool: Vec<char>,
}

impl RoundState {
    /// The scrambled pool as originally dealt
    pub fn pool(&self) -> &[char] {
        &self.pool
    }

    pub fn is_pending(&self) -> bool {
        self.outcome == RoundOutcome::Pending
    }

    /// Timed out: resolved incorrect with no time left
    pub fn is_expired(&self) -> bool {
        self.outcome == RoundOutcome::Incorrect && self.time_remaining == 0
    }

    /// Current attempted spelling
    pub fn attempt(&self) -> String {
        self.selected.iter().collect()
    }
}
