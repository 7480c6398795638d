//! Session state machine
//!
//! Screens: registration -> start -> level select -> play -> (level select |
//! complete). Every screen but registration can return to start. The
//! controller owns the progress tracker and the active level; hosts drive it
//! with player actions and one-second ticks.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::audio::{FeedbackSink, SoundEffect};
use crate::content::ContentProvider;
use crate::engine::{
    Advance, Difficulty, GameMode, LevelEngine, LevelPhase, RoundOutcome, TickOutcome,
    TimerHandle,
};
use crate::error::SessionError;
use crate::persistence::KeyValueStore;
use crate::progress::{ProgressTracker, UserData};
use crate::settings::Settings;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Registration,
    Start,
    LevelSelect,
    Play,
    Complete,
}

/// Drives one player's session
pub struct SessionController {
    screen: Screen,
    progress: ProgressTracker,
    settings: Settings,
    content: Box<dyn ContentProvider>,
    feedback: Box<dyn FeedbackSink>,
    /// Active level, only while on the play screen
    level: Option<LevelEngine>,
    /// Catalog number of the active level
    level_number: u32,
    /// Seeds for level engines
    rng: Pcg32,
    /// Level engines started so far (timer owner ids)
    levels_started: u64,
}

impl SessionController {
    /// Load progress and settings from `store` and open on registration
    /// (no stored user) or start
    pub fn new(
        store: Box<dyn KeyValueStore>,
        content: Box<dyn ContentProvider>,
        mut feedback: Box<dyn FeedbackSink>,
        seed: u64,
    ) -> Self {
        let progress = ProgressTracker::load(store);
        let settings = Settings::load(progress.store());
        feedback.set_volume(settings.effective_volume());

        let screen = if progress.user_data().is_some() {
            Screen::Start
        } else {
            Screen::Registration
        };
        log::info!("Session opened on {:?}", screen);

        Self {
            screen,
            progress,
            settings,
            content,
            feedback,
            level: None,
            level_number: 0,
            rng: Pcg32::seed_from_u64(seed),
            levels_started: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn level(&self) -> Option<&LevelEngine> {
        self.level.as_ref()
    }

    /// Catalog size for the current difficulty
    pub fn level_count(&self) -> u32 {
        self.content.level_count(self.progress.difficulty())
    }

    /// `(level, unlocked)` for every level of `difficulty`
    pub fn level_statuses(&self, difficulty: Difficulty) -> Vec<(u32, bool)> {
        (1..=self.content.level_count(difficulty))
            .map(|n| (n, self.progress.is_unlocked(difficulty, n)))
            .collect()
    }

    /// Handle for the running round countdown
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.level.as_ref().and_then(LevelEngine::timer_handle)
    }

    fn expect_screen(&self, expected: Screen) -> Result<(), SessionError> {
        if self.screen != expected {
            return Err(SessionError::WrongScreen {
                expected,
                actual: self.screen,
            });
        }
        Ok(())
    }

    fn play_sound(&self, effect: SoundEffect) {
        if self.settings.sound_enabled {
            self.feedback.notify(effect);
        }
    }

    fn active_level(&mut self) -> Result<&mut LevelEngine, SessionError> {
        self.expect_screen(Screen::Play)?;
        self.level.as_mut().ok_or(SessionError::NoActiveLevel)
    }

    fn save_settings(&mut self) {
        self.feedback.set_volume(self.settings.effective_volume());
        self.settings.save(self.progress.store_mut());
    }

    // === Navigation ===

    /// Submit the registration form
    pub fn register(&mut self, user: UserData) -> Result<(), SessionError> {
        self.expect_screen(Screen::Registration)?;
        user.validate()?;
        log::info!("Registered player {}", user.name);
        self.progress.set_user_data(user);
        self.screen = Screen::Start;
        Ok(())
    }

    /// Start screen -> level select
    pub fn launch(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Screen::Start)?;
        self.play_sound(SoundEffect::Click);
        self.screen = Screen::LevelSelect;
        Ok(())
    }

    /// Change difficulty (start or level-select screen). Positions are kept
    /// per difficulty.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        if !matches!(self.screen, Screen::Start | Screen::LevelSelect) {
            return Err(SessionError::WrongScreen {
                expected: Screen::Start,
                actual: self.screen,
            });
        }
        self.play_sound(SoundEffect::Click);
        self.progress.set_difficulty(difficulty);
        Ok(())
    }

    /// Change how the next level is presented
    pub fn select_game_mode(&mut self, mode: GameMode) {
        self.play_sound(SoundEffect::Click);
        self.settings.game_mode = mode;
        self.save_settings();
    }

    /// Flip sound on/off; returns the new state
    pub fn toggle_sound(&mut self) -> bool {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.save_settings();
        self.settings.sound_enabled
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.settings.set_volume(volume);
        self.save_settings();
    }

    /// Level select -> play
    pub fn select_level(&mut self, number: u32) -> Result<(), SessionError> {
        self.expect_screen(Screen::LevelSelect)?;
        let difficulty = self.progress.difficulty();
        if number > self.content.level_count(difficulty)
            || !self.progress.is_unlocked(difficulty, number)
        {
            return Err(SessionError::LevelLocked {
                difficulty,
                level: number,
            });
        }

        let level = self.content.level(difficulty, number);
        self.levels_started += 1;
        let seed = self.rng.random::<u64>();
        let engine = LevelEngine::start(
            level,
            difficulty,
            self.settings.game_mode,
            seed,
            self.levels_started,
        )
        .ok_or(SessionError::EmptyLevel(number))?;

        self.play_sound(SoundEffect::Click);
        self.progress.set_current_level(number);
        self.level = Some(engine);
        self.level_number = number;
        self.screen = Screen::Play;
        Ok(())
    }

    /// Back to the start screen from anywhere but registration. Leaving play
    /// abandons the level and its countdown.
    pub fn return_home(&mut self) -> Result<(), SessionError> {
        if self.screen == Screen::Registration {
            return Err(SessionError::WrongScreen {
                expected: Screen::Start,
                actual: self.screen,
            });
        }
        self.play_sound(SoundEffect::Click);
        if self.level.take().is_some() {
            log::info!("Level {} abandoned", self.level_number);
        }
        self.screen = Screen::Start;
        Ok(())
    }

    /// Complete screen -> start
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Screen::Complete)?;
        self.play_sound(SoundEffect::Click);
        self.screen = Screen::Start;
        Ok(())
    }

    /// Wipe all progress, registration included
    pub fn reset_progress(&mut self) {
        self.level = None;
        self.progress.reset();
        self.screen = Screen::Registration;
    }

    // === Play ===

    /// Dismiss the story card and start the clock
    pub fn continue_story(&mut self) -> Result<Option<TimerHandle>, SessionError> {
        let handle = self.active_level()?.continue_story();
        self.play_sound(SoundEffect::Click);
        Ok(handle)
    }

    pub fn select_letter(&mut self, index: usize) -> Result<char, SessionError> {
        let letter = self.active_level()?.select_letter(index)?;
        self.play_sound(SoundEffect::Click);
        Ok(letter)
    }

    pub fn deselect_letter(&mut self, index: usize) -> Result<char, SessionError> {
        let letter = self.active_level()?.deselect_letter(index)?;
        self.play_sound(SoundEffect::Click);
        Ok(letter)
    }

    pub fn reset_selection(&mut self) -> Result<(), SessionError> {
        self.active_level()?.reset_selection()?;
        self.play_sound(SoundEffect::Click);
        Ok(())
    }

    /// Returns the letter the hint placed, if any
    pub fn use_hint(&mut self) -> Result<Option<char>, SessionError> {
        let level = self.active_level()?;
        let before = level.round().hints_remaining;
        let placed = level.use_hint();
        if level.round().hints_remaining < before {
            self.play_sound(SoundEffect::Hint);
        }
        Ok(placed)
    }

    pub fn check(&mut self) -> Result<RoundOutcome, SessionError> {
        let outcome = self.active_level()?.check()?;
        self.play_sound(match outcome {
            RoundOutcome::Correct => SoundEffect::Correct,
            _ => SoundEffect::Wrong,
        });
        Ok(outcome)
    }

    /// Submit the current word and move on
    pub fn next_word(&mut self) -> Result<Advance, SessionError> {
        let advance = self.active_level()?.advance()?;
        self.handle_advance(advance);
        Ok(advance)
    }

    /// One-second countdown callback. Stale handles are ignored.
    pub fn tick(&mut self, handle: TimerHandle) -> TickOutcome<Advance> {
        let Some(level) = self.level.as_mut() else {
            log::debug!("Tick with no active level");
            return TickOutcome::Ignored;
        };
        let outcome = level.tick(handle);
        if let TickOutcome::Expired(advance) = outcome {
            self.play_sound(SoundEffect::Wrong);
            self.handle_advance(advance);
        }
        outcome
    }

    fn handle_advance(&mut self, advance: Advance) {
        match advance {
            Advance::Complete { score, stars } => self.complete_level(score, stars),
            Advance::NextWord { .. } | Advance::Retry => self.play_sound(SoundEffect::Click),
        }
    }

    /// Fold a won level into progress and leave the play screen
    fn complete_level(&mut self, score: u32, stars: u32) {
        let Some(engine) = self.level.take() else {
            return;
        };
        self.play_sound(SoundEffect::Success);

        let difficulty = engine.difficulty();
        let count = self.content.level_count(difficulty);
        let played = self.level_number;

        self.progress.add_score(score);
        self.progress.add_stars(stars);
        self.progress.unlock_level(difficulty, (played + 1).min(count));

        if played < count {
            self.progress.set_current_level(played + 1);
            self.screen = Screen::LevelSelect;
        } else {
            log::info!("Final level of {} complete", difficulty.as_str());
            self.screen = Screen::Complete;
        }
    }

    // === View ===

    /// Everything a front end needs to draw the current screen
    pub fn snapshot(&self) -> SessionSnapshot {
        let record = self.progress.record();
        let difficulty = self.progress.difficulty();
        SessionSnapshot {
            screen: self.screen,
            user_name: record.user_data.as_ref().map(|u| u.name.clone()),
            difficulty,
            game_mode: self.settings.game_mode,
            sound_enabled: self.settings.sound_enabled,
            total_score: record.total_score,
            total_stars: record.total_stars,
            current_level: self.progress.current_level(),
            unlocked_level: self.progress.unlocked(difficulty),
            level_count: self.content.level_count(difficulty),
            play: self.level.as_ref().map(|engine| PlaySnapshot::of(engine, self.level_number)),
        }
    }
}

/// Serializable view of the session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub user_name: Option<String>,
    pub difficulty: Difficulty,
    pub game_mode: GameMode,
    pub sound_enabled: bool,
    pub total_score: u32,
    pub total_stars: u32,
    pub current_level: u32,
    pub unlocked_level: u32,
    pub level_count: u32,
    pub play: Option<PlaySnapshot>,
}

/// Serializable view of the level in play
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaySnapshot {
    pub level: u32,
    pub title: String,
    pub story: String,
    pub lesson: String,
    pub phase: LevelPhase,
    pub word_index: usize,
    pub total_words: usize,
    pub hint: String,
    pub image: Option<String>,
    pub available: Vec<char>,
    pub selected: Vec<char>,
    pub hints_remaining: u32,
    pub time_remaining: u32,
    pub time_budget: u32,
    pub outcome: RoundOutcome,
    pub level_score: u32,
    pub level_stars: u32,
    pub timer: Option<TimerHandle>,
}

impl PlaySnapshot {
    fn of(engine: &LevelEngine, number: u32) -> Self {
        let level = engine.level();
        let round = engine.round();
        let attempt = engine.attempt();
        Self {
            level: number,
            title: level.title.clone(),
            story: level.story.clone(),
            lesson: level.lesson.clone(),
            phase: engine.phase(),
            word_index: attempt.word_index,
            total_words: engine.total_words(),
            hint: round.target.hint.clone(),
            image: round.target.image.clone(),
            available: round.available.clone(),
            selected: round.selected.clone(),
            hints_remaining: round.hints_remaining,
            time_remaining: round.time_remaining,
            time_budget: round.difficulty.time_budget(),
            outcome: round.outcome,
            level_score: attempt.score,
            level_stars: attempt.stars,
            timer: engine.timer_handle(),
        }
    }
}
