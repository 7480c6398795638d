//! Browser bindings
//!
//! A thin `wasm_bindgen` facade over `SessionController`. State goes out as
//! JSON snapshots; the page owns rendering and the one-second interval,
//! which it restarts whenever `timerHandle()` changes.

use std::fmt::Display;

use wasm_bindgen::prelude::*;

use crate::audio::AudioManager;
use crate::content::BuiltinCatalog;
use crate::engine::{Difficulty, GameMode, TimerHandle};
use crate::persistence::{KeyValueStore, MemoryStore};
use crate::platform::LocalStorage;
use crate::progress::UserData;
use crate::session::SessionController;

fn js_err(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_err)
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Word Builder starting...");
}

/// Game instance exposed to the page
#[wasm_bindgen]
pub struct WebGame {
    session: SessionController,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let store: Box<dyn KeyValueStore> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("LocalStorage unavailable ({}), progress will not persist", e);
                Box::new(MemoryStore::new())
            }
        };
        let seed = js_sys::Date::now() as u64;
        log::info!("Session seed: {}", seed);
        WebGame {
            session: SessionController::new(
                store,
                Box::new(BuiltinCatalog::new()),
                Box::new(AudioManager::new()),
                seed,
            ),
        }
    }

    /// Current state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        to_json(&self.session.snapshot())
    }

    /// `[[level, unlocked], ...]` for a difficulty
    #[wasm_bindgen(js_name = levelStatuses)]
    pub fn level_statuses(&self, difficulty: &str) -> Result<String, JsValue> {
        let difficulty: Difficulty = difficulty.parse().map_err(js_err)?;
        to_json(&self.session.level_statuses(difficulty))
    }

    pub fn register(&mut self, name: &str, age: u32, email: &str) -> Result<(), JsValue> {
        self.session
            .register(UserData::new(name, age, email))
            .map_err(js_err)
    }

    pub fn launch(&mut self) -> Result<(), JsValue> {
        self.session.launch().map_err(js_err)
    }

    #[wasm_bindgen(js_name = selectDifficulty)]
    pub fn select_difficulty(&mut self, difficulty: &str) -> Result<(), JsValue> {
        let difficulty: Difficulty = difficulty.parse().map_err(js_err)?;
        self.session.select_difficulty(difficulty).map_err(js_err)
    }

    #[wasm_bindgen(js_name = selectGameMode)]
    pub fn select_game_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: GameMode = mode.parse().map_err(js_err)?;
        self.session.select_game_mode(mode);
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleSound)]
    pub fn toggle_sound(&mut self) -> bool {
        self.session.toggle_sound()
    }

    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, volume: f32) {
        self.session.set_volume(volume);
    }

    #[wasm_bindgen(js_name = selectLevel)]
    pub fn select_level(&mut self, level: u32) -> Result<(), JsValue> {
        self.session.select_level(level).map_err(js_err)
    }

    #[wasm_bindgen(js_name = returnHome)]
    pub fn return_home(&mut self) -> Result<(), JsValue> {
        self.session.return_home().map_err(js_err)
    }

    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.session.restart().map_err(js_err)
    }

    #[wasm_bindgen(js_name = resetProgress)]
    pub fn reset_progress(&mut self) {
        self.session.reset_progress();
    }

    #[wasm_bindgen(js_name = continueStory)]
    pub fn continue_story(&mut self) -> Result<(), JsValue> {
        self.session.continue_story().map(|_| ()).map_err(js_err)
    }

    #[wasm_bindgen(js_name = selectLetter)]
    pub fn select_letter(&mut self, index: usize) -> Result<(), JsValue> {
        self.session.select_letter(index).map(|_| ()).map_err(js_err)
    }

    #[wasm_bindgen(js_name = deselectLetter)]
    pub fn deselect_letter(&mut self, index: usize) -> Result<(), JsValue> {
        self.session.deselect_letter(index).map(|_| ()).map_err(js_err)
    }

    #[wasm_bindgen(js_name = resetSelection)]
    pub fn reset_selection(&mut self) -> Result<(), JsValue> {
        self.session.reset_selection().map_err(js_err)
    }

    #[wasm_bindgen(js_name = useHint)]
    pub fn use_hint(&mut self) -> Result<(), JsValue> {
        self.session.use_hint().map(|_| ()).map_err(js_err)
    }

    /// Returns the outcome as a JSON string ("correct" / "incorrect")
    pub fn check(&mut self) -> Result<String, JsValue> {
        let outcome = self.session.check().map_err(js_err)?;
        to_json(&outcome)
    }

    /// Returns the advance as JSON (`{"kind":"next_word",...}`)
    #[wasm_bindgen(js_name = nextWord)]
    pub fn next_word(&mut self) -> Result<String, JsValue> {
        let advance = self.session.next_word().map_err(js_err)?;
        to_json(&advance)
    }

    /// Handle for the running countdown as JSON, if any
    #[wasm_bindgen(js_name = timerHandle)]
    pub fn timer_handle(&self) -> Result<Option<String>, JsValue> {
        self.session.timer_handle().map(|h| to_json(&h)).transpose()
    }

    /// Interval callback carrying the handle it was started with. Returns
    /// true while that countdown is still live.
    pub fn tick(&mut self, handle: &str) -> Result<bool, JsValue> {
        let handle: TimerHandle = serde_json::from_str(handle).map_err(js_err)?;
        self.session.tick(handle);
        Ok(self.session.timer_handle() == Some(handle))
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
