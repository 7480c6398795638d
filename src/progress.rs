//! Player progress
//!
//! One record per player, persisted as JSON after every change. Level 1 is
//! always unlocked on every difficulty, whatever the store says.

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::PROGRESS_KEY;
use crate::engine::Difficulty;
use crate::error::{PersistenceError, RegistrationError};
use crate::persistence::KeyValueStore;

/// Registration details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub name: String,
    pub age: u32,
    pub email: String,
}

impl UserData {
    pub fn new(name: &str, age: u32, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            age,
            email: email.trim().to_string(),
        }
    }

    /// Name of 2+ characters, age 1-99, email shaped like `a@b.c`
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.name.trim().chars().count() < 2 {
            return Err(RegistrationError::NameTooShort);
        }
        if !(1..=99).contains(&self.age) {
            return Err(RegistrationError::InvalidAge);
        }
        let valid_email = match self.email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !self.email.contains(char::is_whitespace)
                    && domain
                        .rsplit_once('.')
                        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
            }
            None => false,
        };
        if !valid_email {
            return Err(RegistrationError::InvalidEmail);
        }
        Ok(())
    }
}

/// One level number per difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelMap {
    #[serde(deserialize_with = "lenient_level")]
    pub easy: u32,
    #[serde(deserialize_with = "lenient_level")]
    pub medium: u32,
    #[serde(deserialize_with = "lenient_level")]
    pub hard: u32,
}

impl Default for LevelMap {
    fn default() -> Self {
        Self {
            easy: 1,
            medium: 1,
            hard: 1,
        }
    }
}

impl LevelMap {
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn set(&mut self, difficulty: Difficulty, level: u32) {
        match difficulty {
            Difficulty::Easy => self.easy = level,
            Difficulty::Medium => self.medium = level,
            Difficulty::Hard => self.hard = level,
        }
    }

    /// Raise every entry to at least 1
    fn normalize(&mut self) {
        for d in Difficulty::ALL {
            self.set(d, self.get(d).max(1));
        }
    }
}

/// Level number from any stored JSON value. Anything that is not a whole
/// number of at least 1 (negative, null, text) reads as level 1.
fn level_from(value: &serde_json::Value) -> u32 {
    value
        .as_i64()
        .map_or(1, |n| n.clamp(1, i64::from(u32::MAX)) as u32)
}

fn lenient_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(level_from(&serde_json::Value::deserialize(deserializer)?))
}

/// Older records kept one `currentLevel` for all difficulties
fn level_map_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LevelMap, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        PerDifficulty(LevelMap),
        Shared(serde_json::Value),
    }

    Ok(match Stored::deserialize(deserializer)? {
        Stored::PerDifficulty(map) => map,
        Stored::Shared(value) => {
            let level = level_from(&value);
            LevelMap {
                easy: level,
                medium: level,
                hard: level,
            }
        }
    })
}

/// Persisted progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressRecord {
    pub user_data: Option<UserData>,
    /// Highest selectable level per difficulty
    pub unlocked_levels: LevelMap,
    pub total_stars: u32,
    pub total_score: u32,
    /// Player's position per difficulty
    #[serde(deserialize_with = "level_map_or_number")]
    pub current_level: LevelMap,
    pub current_difficulty: Difficulty,
}

impl ProgressRecord {
    /// Apply the level-1-always-unlocked repair
    pub fn normalize(&mut self) {
        self.unlocked_levels.normalize();
        self.current_level.normalize();
    }
}

/// Owns the progress record and writes it through to a store
pub struct ProgressTracker {
    store: Box<dyn KeyValueStore>,
    record: ProgressRecord,
}

impl ProgressTracker {
    /// Load progress from `store`; missing or unreadable data yields defaults
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let mut record = match Self::read(store.as_ref()) {
            Ok(Some(record)) => {
                log::info!(
                    "Loaded progress ({} points, {} stars)",
                    record.total_score,
                    record.total_stars
                );
                record
            }
            Ok(None) => {
                log::info!("No saved progress found, starting fresh");
                ProgressRecord::default()
            }
            Err(PersistenceError::Serialize(e)) => {
                log::warn!("Saved progress is corrupt ({}), starting fresh", e);
                ProgressRecord::default()
            }
            Err(e) => {
                log::warn!("Failed to load progress: {}", e);
                ProgressRecord::default()
            }
        };
        record.normalize();
        Self { store, record }
    }

    fn read(store: &dyn KeyValueStore) -> Result<Option<ProgressRecord>, PersistenceError> {
        match store.get(PROGRESS_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn write(&mut self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&self.record)?;
        self.store.set(PROGRESS_KEY, &json)?;
        Ok(())
    }

    /// Persist the record. Failures are logged; the in-memory record stays
    /// authoritative.
    pub fn save(&mut self) {
        if let Err(e) = self.write() {
            log::warn!("Failed to save progress: {}", e);
        }
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        self.store.as_mut()
    }

    pub fn user_data(&self) -> Option<&UserData> {
        self.record.user_data.as_ref()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.record.current_difficulty
    }

    /// Position in the current difficulty
    pub fn current_level(&self) -> u32 {
        self.record.current_level.get(self.record.current_difficulty)
    }

    pub fn unlocked(&self, difficulty: Difficulty) -> u32 {
        self.record.unlocked_levels.get(difficulty)
    }

    pub fn is_unlocked(&self, difficulty: Difficulty, level: u32) -> bool {
        level >= 1 && level <= self.unlocked(difficulty)
    }

    pub fn set_user_data(&mut self, user: UserData) {
        self.record.user_data = Some(user);
        self.save();
    }

    /// Raise the unlock high-water mark; never lowers it
    pub fn unlock_level(&mut self, difficulty: Difficulty, level: u32) {
        let current = self.unlocked(difficulty);
        if level <= current {
            return;
        }
        self.record.unlocked_levels.set(difficulty, level);
        log::info!("Unlocked level {} on {}", level, difficulty.as_str());
        self.save();
    }

    pub fn add_score(&mut self, delta: u32) {
        self.record.total_score = self.record.total_score.saturating_add(delta);
        self.save();
    }

    pub fn add_stars(&mut self, delta: u32) {
        self.record.total_stars = self.record.total_stars.saturating_add(delta);
        self.save();
    }

    /// Set the position in the current difficulty
    pub fn set_current_level(&mut self, level: u32) {
        let difficulty = self.record.current_difficulty;
        self.record.current_level.set(difficulty, level.max(1));
        self.save();
    }

    /// Switch difficulty; each difficulty keeps its own position
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.record.current_difficulty = difficulty;
        self.save();
    }

    /// Back to a blank record, registration included
    pub fn reset(&mut self) {
        self.record = ProgressRecord::default();
        log::info!("Progress reset");
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Memory store whose contents outlive the tracker, with switchable failures
    #[derive(Clone, Default)]
    struct SharedStore {
        inner: Rc<RefCell<MemoryStore>>,
        fail: Rc<RefCell<bool>>,
    }

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            if *self.fail.borrow() {
                return Err(StoreError::Unavailable("read blocked".to_string()));
            }
            self.inner.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if *self.fail.borrow() {
                return Err(StoreError::Unavailable("quota exceeded".to_string()));
            }
            self.inner.borrow_mut().set(key, value)
        }
    }

    fn tracker_with(json: &str) -> ProgressTracker {
        ProgressTracker::load(Box::new(MemoryStore::with_entry(PROGRESS_KEY, json)))
    }

    #[test]
    fn test_fresh_defaults() {
        let tracker = ProgressTracker::load(Box::new(MemoryStore::new()));
        let record = tracker.record();
        assert_eq!(record.user_data, None);
        assert_eq!(record.unlocked_levels, LevelMap::default());
        assert_eq!(record.total_score, 0);
        assert_eq!(record.total_stars, 0);
        assert_eq!(tracker.current_level(), 1);
        assert_eq!(tracker.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_corrupt_data_falls_back() {
        let tracker = tracker_with("{not json");
        assert_eq!(*tracker.record(), ProgressRecord::default());
    }

    #[test]
    fn test_load_repairs_unlocks() {
        let tracker = tracker_with(
            r#"{"unlockedLevels":{"easy":0,"medium":4},"totalScore":120,"currentDifficulty":"medium"}"#,
        );
        assert_eq!(tracker.unlocked(Difficulty::Easy), 1);
        assert_eq!(tracker.unlocked(Difficulty::Medium), 4);
        assert_eq!(tracker.unlocked(Difficulty::Hard), 1);
        assert_eq!(tracker.record().total_score, 120);
        assert_eq!(tracker.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_bad_unlock_entry_keeps_rest_of_record() {
        let tracker = tracker_with(
            r#"{"userData":{"name":"Ada","age":9,"email":"ada@example.com"},"unlockedLevels":{"easy":-2,"medium":5},"totalScore":500,"totalStars":40}"#,
        );
        assert_eq!(tracker.user_data().map(|u| u.name.as_str()), Some("Ada"));
        assert_eq!(tracker.record().total_score, 500);
        assert_eq!(tracker.record().total_stars, 40);
        assert_eq!(tracker.unlocked(Difficulty::Easy), 1);
        assert_eq!(tracker.unlocked(Difficulty::Medium), 5);

        let tracker = tracker_with(
            r#"{"userData":{"name":"Ada","age":9,"email":"ada@example.com"},"unlockedLevels":{"easy":null,"medium":3,"hard":"x"},"currentLevel":null,"totalScore":70}"#,
        );
        assert!(tracker.user_data().is_some());
        assert_eq!(tracker.record().total_score, 70);
        assert_eq!(tracker.unlocked(Difficulty::Easy), 1);
        assert_eq!(tracker.unlocked(Difficulty::Medium), 3);
        assert_eq!(tracker.unlocked(Difficulty::Hard), 1);
        assert_eq!(tracker.current_level(), 1);
    }

    #[test]
    fn test_shared_current_level_is_read() {
        let tracker = tracker_with(r#"{"currentLevel":3,"currentDifficulty":"hard"}"#);
        assert_eq!(tracker.current_level(), 3);
        assert_eq!(tracker.record().current_level.get(Difficulty::Easy), 3);
    }

    #[test]
    fn test_unlock_is_monotonic() {
        let mut tracker = ProgressTracker::load(Box::new(MemoryStore::new()));
        tracker.unlock_level(Difficulty::Hard, 5);
        tracker.unlock_level(Difficulty::Hard, 4);
        assert_eq!(tracker.unlocked(Difficulty::Hard), 5);
        assert_eq!(tracker.unlocked(Difficulty::Easy), 1);
        assert!(tracker.is_unlocked(Difficulty::Hard, 5));
        assert!(!tracker.is_unlocked(Difficulty::Hard, 6));
        assert!(tracker.is_unlocked(Difficulty::Easy, 1));
        assert!(!tracker.is_unlocked(Difficulty::Easy, 0));
    }

    #[test]
    fn test_mutations_are_persisted() {
        let store = SharedStore::default();
        let mut tracker = ProgressTracker::load(Box::new(store.clone()));
        tracker.set_user_data(UserData::new("Ada", 9, "ada@example.com"));
        tracker.add_score(22);
        tracker.add_score(18);
        tracker.add_stars(3);
        tracker.set_difficulty(Difficulty::Hard);
        tracker.set_current_level(3);

        let reloaded = ProgressTracker::load(Box::new(store));
        assert_eq!(reloaded.record(), tracker.record());
        assert_eq!(reloaded.record().total_score, 40);
        assert_eq!(reloaded.current_level(), 3);
    }

    #[test]
    fn test_current_level_per_difficulty() {
        let mut tracker = ProgressTracker::load(Box::new(MemoryStore::new()));
        tracker.set_current_level(4);
        tracker.set_difficulty(Difficulty::Medium);
        assert_eq!(tracker.current_level(), 1);
        tracker.set_current_level(2);
        tracker.set_difficulty(Difficulty::Easy);
        assert_eq!(tracker.current_level(), 4);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let store = SharedStore::default();
        let mut tracker = ProgressTracker::load(Box::new(store.clone()));
        *store.fail.borrow_mut() = true;
        tracker.add_score(30);
        tracker.unlock_level(Difficulty::Easy, 2);
        assert_eq!(tracker.record().total_score, 30);
        assert_eq!(tracker.unlocked(Difficulty::Easy), 2);
        assert!(store.inner.borrow().is_empty());
    }

    #[test]
    fn test_read_failure_gives_defaults() {
        let store = SharedStore::default();
        *store.fail.borrow_mut() = true;
        let tracker = ProgressTracker::load(Box::new(store));
        assert_eq!(*tracker.record(), ProgressRecord::default());
    }

    #[test]
    fn test_reset() {
        let mut tracker = ProgressTracker::load(Box::new(MemoryStore::new()));
        tracker.set_user_data(UserData::new("Ada", 9, "ada@example.com"));
        tracker.unlock_level(Difficulty::Medium, 7);
        tracker.add_stars(9);
        tracker.reset();
        assert_eq!(*tracker.record(), ProgressRecord::default());
    }

    #[test]
    fn test_validate_user_data() {
        assert_eq!(UserData::new("Ada", 9, "ada@example.com").validate(), Ok(()));
        assert_eq!(
            UserData::new(" A ", 9, "ada@example.com").validate(),
            Err(RegistrationError::NameTooShort)
        );
        assert_eq!(
            UserData::new("Ada", 0, "ada@example.com").validate(),
            Err(RegistrationError::InvalidAge)
        );
        assert_eq!(
            UserData::new("Ada", 100, "ada@example.com").validate(),
            Err(RegistrationError::InvalidAge)
        );
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a da@example.com"] {
            assert_eq!(
                UserData::new("Ada", 9, bad).validate(),
                Err(RegistrationError::InvalidEmail),
                "{}",
                bad
            );
        }
    }

    fn arb_difficulty() -> impl Strategy<Value = Difficulty> {
        prop_oneof![
            Just(Difficulty::Easy),
            Just(Difficulty::Medium),
            Just(Difficulty::Hard)
        ]
    }

    proptest! {
        #[test]
        fn prop_unlock_never_regresses(d in arb_difficulty(), level in 2u32..50) {
            let mut tracker = ProgressTracker::load(Box::new(MemoryStore::new()));
            tracker.unlock_level(d, level);
            tracker.unlock_level(d, level - 1);
            prop_assert_eq!(tracker.unlocked(d), level);
        }

        #[test]
        fn prop_save_load_round_trip(
            easy in 0u32..20,
            medium in 0u32..20,
            hard in 0u32..20,
            stars in any::<u32>(),
            score in any::<u32>(),
            current in 1u32..20,
            d in arb_difficulty(),
        ) {
            let record = ProgressRecord {
                user_data: Some(UserData::new("Kim", 12, "kim@example.org")),
                unlocked_levels: LevelMap { easy, medium, hard },
                total_stars: stars,
                total_score: score,
                current_level: LevelMap { easy: current, medium: current, hard: current },
                current_difficulty: d,
            };
            let store = SharedStore::default();
            let mut saved = ProgressTracker {
                store: Box::new(store.clone()),
                record: record.clone(),
            };
            saved.save();
            let tracker = ProgressTracker::load(Box::new(store));

            let mut expected = record.clone();
            expected.unlocked_levels = LevelMap {
                easy: easy.max(1),
                medium: medium.max(1),
                hard: hard.max(1),
            };
            prop_assert_eq!(tracker.record(), &expected);
        }
    }
}
