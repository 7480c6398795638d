//! Level content
//!
//! Read-only lookup of levels by difficulty and number. Lookups never fail:
//! an out-of-range number falls back to the first level of the difficulty.

mod catalog;

use crate::engine::{Difficulty, Level, Word};

/// Source of level data
pub trait ContentProvider {
    /// Level `number` (1-based) for `difficulty`, or that difficulty's first
    /// level when `number` is out of range
    fn level(&self, difficulty: Difficulty, number: u32) -> Level;

    /// Number of levels available for `difficulty`
    fn level_count(&self, difficulty: Difficulty) -> u32;
}

/// Static word entry: spelling, hint, image URI
pub(crate) struct WordDef {
    word: &'static str,
    hint: &'static str,
    image: &'static str,
}

pub(crate) const fn w(word: &'static str, hint: &'static str, image: &'static str) -> WordDef {
    WordDef { word, hint, image }
}

pub(crate) struct LevelDef {
    id: u32,
    title: &'static str,
    story: &'static str,
    lesson: &'static str,
    words: [WordDef; 5],
}

impl LevelDef {
    fn to_level(&self) -> Level {
        Level {
            id: self.id,
            title: self.title.to_string(),
            story: self.story.to_string(),
            lesson: self.lesson.to_string(),
            words: self
                .words
                .iter()
                .map(|d| Word::new(d.word, d.hint, (!d.image.is_empty()).then_some(d.image)))
                .collect(),
        }
    }
}

/// The levels shipped with the game
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    fn levels(difficulty: Difficulty) -> &'static [LevelDef] {
        match difficulty {
            Difficulty::Easy => catalog::EASY,
            Difficulty::Medium => catalog::MEDIUM,
            Difficulty::Hard => catalog::HARD,
        }
    }
}

impl ContentProvider for BuiltinCatalog {
    fn level(&self, difficulty: Difficulty, number: u32) -> Level {
        let levels = Self::levels(difficulty);
        let def = (number as usize)
            .checked_sub(1)
            .and_then(|i| levels.get(i))
            .unwrap_or(&levels[0]);
        def.to_level()
    }

    fn level_count(&self, difficulty: Difficulty) -> u32 {
        Self::levels(difficulty).len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_number() {
        let catalog = BuiltinCatalog::new();
        let level = catalog.level(Difficulty::Easy, 1);
        assert_eq!(level.id, 1);
        assert_eq!(level.title, "Farm Adventure");
        assert_eq!(level.words[0].word, "cow");
        assert!(level.words[0].image.is_some());

        assert_eq!(catalog.level(Difficulty::Hard, 10).id, 10);
    }

    #[test]
    fn test_out_of_range_falls_back_to_first() {
        let catalog = BuiltinCatalog::new();
        for d in Difficulty::ALL {
            let first = catalog.level(d, 1);
            assert_eq!(catalog.level(d, 0), first);
            assert_eq!(catalog.level(d, 11), first);
            assert_eq!(catalog.level(d, u32::MAX), first);
        }
    }

    #[test]
    fn test_catalog_shape() {
        let catalog = BuiltinCatalog::new();
        for d in Difficulty::ALL {
            assert_eq!(catalog.level_count(d), 10);
            for n in 1..=catalog.level_count(d) {
                let level = catalog.level(d, n);
                assert_eq!(level.id, n);
                assert_eq!(level.words.len(), 5);
                for word in &level.words {
                    assert!(
                        word.word.chars().all(|c| c.is_ascii_lowercase()),
                        "{} has non-lowercase letters",
                        word.word
                    );
                    assert!(!word.hint.is_empty());
                }
            }
        }
    }
}
