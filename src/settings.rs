//! Player preferences
//!
//! Persisted separately from progress, under their own key.

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_KEY;
use crate::engine::GameMode;
use crate::persistence::KeyValueStore;

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Feedback sounds on/off
    pub sound_enabled: bool,
    /// Sound volume (0.0 - 1.0)
    pub volume: f32,

    // === Play ===
    /// Story or practice presentation of levels
    pub game_mode: GameMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            volume: 0.5,
            game_mode: GameMode::Story,
        }
    }
}

impl Settings {
    /// Set volume (0.0 - 1.0)
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = if vol.is_finite() { vol.clamp(0.0, 1.0) } else { 0.0 };
    }

    /// Volume actually applied (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled { self.volume } else { 0.0 }
    }

    /// Load settings, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Settings>(&json) {
                Ok(mut settings) => {
                    settings.set_volume(settings.volume);
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Saved settings are corrupt: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Failed to load settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings; failures are logged and ignored
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => match store.set(SETTINGS_KEY, &json) {
                Ok(()) => log::debug!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings: {}", e),
            },
            Err(e) => log::warn!("Failed to encode settings: {}", e),
        }
    }
}
