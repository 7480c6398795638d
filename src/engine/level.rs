//! Level engine
//!
//! Sequences the rounds of one level, folds their results into a
//! `LevelAttempt` and decides between next word, retry and completion.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Difficulty, GameMode, Level, RoundOutcome, RoundState};
use super::timer::{RoundTimer, TickOutcome, TimerHandle};
use crate::consts::{HINTS_PER_LEVEL, REQUIRED_CORRECT_WORDS};
use crate::error::RoundError;

/// Running totals for one pass through a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelAttempt {
    /// Index of the word being played
    pub word_index: usize,
    pub rounds_correct: u32,
    pub score: u32,
    pub stars: u32,
}

/// What happens after a round is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advance {
    /// Move on to the word at `index`
    NextWord { index: usize },
    /// Word list ran out before the level was won; start over from word 0
    Retry,
    /// Level won with these totals
    Complete { score: u32, stars: u32 },
}

impl LevelAttempt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a resolved round into the totals and apply the advancement rule.
    ///
    /// A correct answer completes the level on the last word or on any word
    /// from the `REQUIRED_CORRECT_WORDS`-th onward. Running out of words
    /// without that starts a fresh attempt.
    pub fn record(&mut self, round: &RoundState, total_words: usize) -> Advance {
        let correct = round.outcome == RoundOutcome::Correct;
        if correct {
            self.rounds_correct += 1;
            self.score += round.score();
            self.stars += round.stars();
        }

        let is_last = self.word_index + 1 >= total_words;
        if correct && (is_last || self.word_index + 1 >= REQUIRED_CORRECT_WORDS) {
            return Advance::Complete {
                score: self.score,
                stars: self.stars,
            };
        }

        if !is_last {
            self.word_index += 1;
            Advance::NextWord {
                index: self.word_index,
            }
        } else {
            *self = Self::new();
            Advance::Retry
        }
    }
}

/// Where the level is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelPhase {
    /// Story card shown, clock not running
    Story,
    Playing,
    Complete,
}

/// Drives the rounds of one level
#[derive(Debug, Clone)]
pub struct LevelEngine {
    level: Level,
    difficulty: Difficulty,
    attempt: LevelAttempt,
    round: RoundState,
    phase: LevelPhase,
    timer: RoundTimer,
    rng: Pcg32,
    /// Forced restarts so far
    retries: u32,
}

impl LevelEngine {
    /// Open a level. `seed` drives the letter pools, `owner` tags the
    /// countdown handles. Returns `None` for a level without words.
    pub fn start(
        level: Level,
        difficulty: Difficulty,
        mode: GameMode,
        seed: u64,
        owner: u64,
    ) -> Option<Self> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let first = level.words.first()?.clone();
        let round = RoundState::start(first, difficulty, HINTS_PER_LEVEL, &mut rng);

        let mut engine = Self {
            level,
            difficulty,
            attempt: LevelAttempt::new(),
            round,
            phase: LevelPhase::Story,
            timer: RoundTimer::new(owner),
            rng,
            retries: 0,
        };
        if mode == GameMode::Practice {
            engine.phase = LevelPhase::Playing;
            engine.timer.arm();
        }
        log::info!(
            "Level {} '{}' started on {} ({} words)",
            engine.level.id,
            engine.level.title,
            difficulty.as_str(),
            engine.total_words()
        );
        Some(engine)
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn attempt(&self) -> &LevelAttempt {
        &self.attempt
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn phase(&self) -> LevelPhase {
        self.phase
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn total_words(&self) -> usize {
        self.level.words.len()
    }

    /// Handle for the running countdown, if any
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.timer.handle()
    }

    /// Leave the story card and start the clock
    pub fn continue_story(&mut self) -> Option<TimerHandle> {
        if self.phase != LevelPhase::Story {
            return None;
        }
        self.phase = LevelPhase::Playing;
        Some(self.timer.arm())
    }

    fn ensure_playing(&self) -> Result<(), RoundError> {
        match self.phase {
            LevelPhase::Story => Err(RoundError::NotStarted),
            LevelPhase::Playing => Ok(()),
            LevelPhase::Complete => Err(RoundError::Resolved),
        }
    }

    pub fn select_letter(&mut self, index: usize) -> Result<char, RoundError> {
        self.ensure_playing()?;
        self.round.select_letter(index)
    }

    pub fn deselect_letter(&mut self, index: usize) -> Result<char, RoundError> {
        self.ensure_playing()?;
        self.round.deselect_letter(index)
    }

    pub fn use_hint(&mut self) -> Option<char> {
        self.ensure_playing().ok()?;
        self.round.use_hint()
    }

    /// Check the answer; the clock stops once the round resolves
    pub fn check(&mut self) -> Result<RoundOutcome, RoundError> {
        self.ensure_playing()?;
        let outcome = self.round.check()?;
        self.timer.cancel();
        Ok(outcome)
    }

    /// Clear the answer; after a wrong check this reopens the round and
    /// restarts the clock from where it stopped
    pub fn reset_selection(&mut self) -> Result<(), RoundError> {
        self.ensure_playing()?;
        let was_resolved = !self.round.is_pending();
        self.round.reset_selection()?;
        if was_resolved {
            self.timer.arm();
        }
        Ok(())
    }

    /// One-second callback from the host
    pub fn tick(&mut self, handle: TimerHandle) -> TickOutcome<Advance> {
        if !self.timer.accepts(handle) {
            log::debug!("Ignoring stale tick (generation {})", handle.generation());
            return TickOutcome::Ignored;
        }
        if !self.round.tick() {
            return TickOutcome::Running {
                remaining: self.round.time_remaining,
            };
        }
        self.timer.cancel();
        match self.advance() {
            Ok(advance) => TickOutcome::Expired(advance),
            Err(_) => TickOutcome::Ignored,
        }
    }

    /// Submit the current round and move on. A round still pending is
    /// forfeited.
    pub fn advance(&mut self) -> Result<Advance, RoundError> {
        self.ensure_playing()?;
        self.timer.cancel();
        self.round.forfeit();

        let advance = self.attempt.record(&self.round, self.total_words());
        match advance {
            Advance::NextWord { index } => self.begin_round(index),
            Advance::Retry => {
                self.retries += 1;
                log::info!(
                    "Level {} not won, retrying (attempt {})",
                    self.level.id,
                    self.retries + 1
                );
                self.begin_round(0);
            }
            Advance::Complete { score, stars } => {
                self.phase = LevelPhase::Complete;
                log::info!(
                    "Level {} complete: {} points, {} stars",
                    self.level.id,
                    score,
                    stars
                );
            }
        }
        Ok(advance)
    }

    fn begin_round(&mut self, index: usize) {
        let hints = self.round.hints_remaining;
        let target = self.level.words[index].clone();
        self.round = RoundState::start(target, self.difficulty, hints, &mut self.rng);
        self.timer.arm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Word;

    fn level() -> Level {
        Level {
            id: 1,
            title: "Farm Adventure".to_string(),
            story: "Help Farmer Joe.".to_string(),
            lesson: "Farm animals".to_string(),
            words: ["cow", "pig", "hen", "duck", "goat"]
                .iter()
                .map(|w| Word::new(w, "an animal", None))
                .collect(),
        }
    }

    fn practice() -> LevelEngine {
        LevelEngine::start(level(), Difficulty::Easy, GameMode::Practice, 1234, 1).unwrap()
    }

    /// Spell the current target and check it
    fn solve(engine: &mut LevelEngine) -> RoundOutcome {
        let target = engine.round().target.word.clone();
        for c in target.chars() {
            let index = engine
                .round()
                .available
                .iter()
                .position(|&l| l == c)
                .unwrap();
            engine.select_letter(index).unwrap();
        }
        engine.check().unwrap()
    }

    fn fail(engine: &mut LevelEngine) -> RoundOutcome {
        engine.select_letter(0).unwrap();
        engine.select_letter(0).unwrap();
        engine.select_letter(0).unwrap();
        engine.select_letter(0).unwrap();
        engine.select_letter(0).unwrap();
        engine.check().unwrap()
    }

    #[test]
    fn test_completes_after_fourth_word() {
        let mut engine = practice();
        for expected in 1..=3 {
            assert_eq!(solve(&mut engine), RoundOutcome::Correct);
            assert_eq!(engine.advance(), Ok(Advance::NextWord { index: expected }));
        }
        assert_eq!(solve(&mut engine), RoundOutcome::Correct);
        let advance = engine.advance().unwrap();
        assert!(matches!(advance, Advance::Complete { .. }));
        assert_eq!(engine.phase(), LevelPhase::Complete);
        assert_eq!(engine.attempt().rounds_correct, 4);
        assert_eq!(engine.attempt().word_index, 3);
        assert!(engine.timer_handle().is_none());

        // Four instant answers on easy: 22 points and 3 stars each
        assert_eq!(advance, Advance::Complete { score: 88, stars: 12 });
    }

    #[test]
    fn test_last_word_completes_after_early_misses() {
        let mut engine = practice();
        for _ in 0..4 {
            fail(&mut engine);
            engine.advance().unwrap();
        }
        assert_eq!(engine.round().target.word, "goat");
        solve(&mut engine);
        assert_eq!(
            engine.advance(),
            Ok(Advance::Complete { score: 22, stars: 3 })
        );
    }

    #[test]
    fn test_exhausted_words_restart_fresh() {
        let mut engine = practice();
        solve(&mut engine);
        engine.advance().unwrap();
        for _ in 1..5 {
            fail(&mut engine);
            engine.advance().unwrap();
        }
        assert_eq!(engine.retries(), 1);
        assert_eq!(*engine.attempt(), LevelAttempt::new());
        assert_eq!(engine.round().target.word, "cow");
        assert!(engine.round().is_pending());
        assert!(engine.timer_handle().is_some());
    }

    #[test]
    fn test_record_rule() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut round =
            RoundState::start(Word::new("cow", "", None), Difficulty::Easy, 3, &mut rng);
        round.outcome = RoundOutcome::Correct;

        // Third word correct: keep going
        let mut attempt = LevelAttempt {
            word_index: 2,
            ..LevelAttempt::new()
        };
        assert_eq!(attempt.record(&round, 5), Advance::NextWord { index: 3 });

        // Fourth word correct: done, even with earlier misses
        assert!(matches!(attempt.record(&round, 5), Advance::Complete { .. }));

        // Last word wrong: start over
        round.outcome = RoundOutcome::Incorrect;
        let mut attempt = LevelAttempt {
            word_index: 4,
            rounds_correct: 2,
            score: 40,
            stars: 5,
        };
        assert_eq!(attempt.record(&round, 5), Advance::Retry);
        assert_eq!(attempt, LevelAttempt::new());
    }

    #[test]
    fn test_story_mode_waits_for_player() {
        let mut engine =
            LevelEngine::start(level(), Difficulty::Easy, GameMode::Story, 1, 1).unwrap();
        assert_eq!(engine.phase(), LevelPhase::Story);
        assert!(engine.timer_handle().is_none());
        assert_eq!(engine.select_letter(0), Err(RoundError::NotStarted));
        assert_eq!(engine.advance(), Err(RoundError::NotStarted));

        let handle = engine.continue_story().unwrap();
        assert_eq!(engine.phase(), LevelPhase::Playing);
        assert_eq!(
            engine.tick(handle),
            TickOutcome::Running { remaining: 59 }
        );
        assert!(engine.continue_story().is_none());
    }

    #[test]
    fn test_time_up_moves_to_next_word() {
        let mut engine = practice();
        let handle = engine.timer_handle().unwrap();
        for _ in 0..59 {
            assert!(matches!(engine.tick(handle), TickOutcome::Running { .. }));
        }
        assert_eq!(
            engine.tick(handle),
            TickOutcome::Expired(Advance::NextWord { index: 1 })
        );
        assert_eq!(engine.round().target.word, "pig");
        assert_eq!(engine.round().time_remaining, 60);

        // The old countdown cannot touch the new round
        assert_eq!(engine.tick(handle), TickOutcome::Ignored);
        assert_eq!(engine.round().time_remaining, 60);
    }

    #[test]
    fn test_check_stops_clock() {
        let mut engine = practice();
        let handle = engine.timer_handle().unwrap();
        fail(&mut engine);
        assert_eq!(engine.tick(handle), TickOutcome::Ignored);

        // Retrying restarts the clock under a new handle
        engine.reset_selection().unwrap();
        let retry = engine.timer_handle().unwrap();
        assert_ne!(retry, handle);
        assert_eq!(engine.tick(retry), TickOutcome::Running { remaining: 59 });
    }

    #[test]
    fn test_hints_shared_across_words() {
        let mut engine = practice();
        assert!(engine.use_hint().is_some());
        assert!(engine.use_hint().is_some());
        engine.advance().unwrap();
        assert_eq!(engine.round().hints_remaining, 1);
        assert!(engine.use_hint().is_some());
        assert_eq!(engine.use_hint(), None);
        assert_eq!(engine.round().attempt(), "p");
    }

    #[test]
    fn test_advance_forfeits_pending_round() {
        let mut engine = practice();
        assert_eq!(engine.advance(), Ok(Advance::NextWord { index: 1 }));
        assert_eq!(engine.attempt().rounds_correct, 0);
    }

    #[test]
    fn test_empty_level_rejected() {
        let mut empty = level();
        empty.words.clear();
        assert!(LevelEngine::start(empty, Difficulty::Easy, GameMode::Practice, 1, 1).is_none());
    }
}
