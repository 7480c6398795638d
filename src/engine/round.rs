//! Round engine
//!
//! One word-building attempt: dealing the pool, moving letters between the
//! pool and the answer, hints, checking, and the countdown.

use rand::Rng;
use rand::seq::SliceRandom;

use super::state::{Difficulty, RoundOutcome, RoundState, Word};
use crate::error::RoundError;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Deal a scrambled pool: the word's letters plus `extra` uniform random
/// lowercase letters (duplicates allowed), shuffled together.
pub fn deal_pool<R: Rng + ?Sized>(word: &str, extra: usize, rng: &mut R) -> Vec<char> {
    let mut pool: Vec<char> = word.chars().collect();
    pool.extend((0..extra).map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char));
    pool.shuffle(rng);
    pool
}

impl RoundState {
    /// Start a round for `target` with `hints` left in the level
    pub fn start<R: Rng + ?Sized>(
        target: Word,
        difficulty: Difficulty,
        hints: u32,
        rng: &mut R,
    ) -> Self {
        let pool = deal_pool(&target.word, difficulty.extra_letters(), rng);
        Self {
            target,
            difficulty,
            available: pool.clone(),
            selected: Vec::new(),
            hints_remaining: hints,
            time_remaining: difficulty.time_budget(),
            outcome: RoundOutcome::Pending,
            pool,
        }
    }

    /// Move the pool letter at `index` to the end of the answer
    pub fn select_letter(&mut self, index: usize) -> Result<char, RoundError> {
        if !self.is_pending() || index >= self.available.len() {
            return Err(RoundError::InvalidIndex {
                index,
                len: self.available.len(),
            });
        }
        let letter = self.available.remove(index);
        self.selected.push(letter);
        Ok(letter)
    }

    /// Move the answer letter at `index` back to the end of the pool
    pub fn deselect_letter(&mut self, index: usize) -> Result<char, RoundError> {
        if !self.is_pending() || index >= self.selected.len() {
            return Err(RoundError::InvalidIndex {
                index,
                len: self.selected.len(),
            });
        }
        let letter = self.selected.remove(index);
        self.available.push(letter);
        Ok(letter)
    }

    /// Return every selected letter to the pool.
    ///
    /// After an incorrect check this reopens the round for another try.
    /// A solved or timed-out round is left untouched.
    pub fn reset_selection(&mut self) -> Result<(), RoundError> {
        match self.outcome {
            RoundOutcome::Correct => return Err(RoundError::Resolved),
            RoundOutcome::Incorrect if self.time_remaining == 0 => {
                return Err(RoundError::Resolved);
            }
            RoundOutcome::Incorrect => self.outcome = RoundOutcome::Pending,
            RoundOutcome::Pending => {}
        }
        self.available.append(&mut self.selected);
        Ok(())
    }

    /// Spend a hint to place the next correct letter.
    ///
    /// Returns the letter placed. A hint is spent even when the letter is
    /// no longer in the pool; nothing happens when no hints are left or the
    /// round is resolved.
    pub fn use_hint(&mut self) -> Option<char> {
        if self.hints_remaining == 0 || !self.is_pending() {
            return None;
        }
        self.hints_remaining -= 1;

        let next = self.target.word.chars().nth(self.selected.len())?;
        let index = self
            .available
            .iter()
            .position(|l| l.eq_ignore_ascii_case(&next))?;
        self.select_letter(index).ok()
    }

    /// Compare the attempt against the target (case-insensitive) and resolve
    pub fn check(&mut self) -> Result<RoundOutcome, RoundError> {
        if !self.is_pending() {
            return Err(RoundError::Resolved);
        }
        if self.selected.is_empty() {
            return Err(RoundError::EmptySelection);
        }
        let attempt = self.attempt();
        self.outcome = if attempt.to_lowercase() == self.target.word.to_lowercase() {
            RoundOutcome::Correct
        } else {
            RoundOutcome::Incorrect
        };
        log::debug!(
            "Checked '{}' against '{}': {:?}",
            attempt,
            self.target.word,
            self.outcome
        );
        Ok(self.outcome)
    }

    /// Count one second down. Returns true on the tick that hits zero,
    /// which resolves the round as incorrect.
    pub fn tick(&mut self) -> bool {
        if !self.is_pending() || self.time_remaining == 0 {
            return false;
        }
        self.time_remaining -= 1;
        if self.time_remaining == 0 {
            self.outcome = RoundOutcome::Incorrect;
            log::debug!("Time up on '{}'", self.target.word);
            return true;
        }
        false
    }

    /// Resolve a still-pending round as incorrect (skipped word)
    pub fn forfeit(&mut self) {
        if self.is_pending() {
            self.outcome = RoundOutcome::Incorrect;
        }
    }

    /// Points for a solved round: base score plus one per 5 seconds left
    pub fn score(&self) -> u32 {
        if self.outcome != RoundOutcome::Correct {
            return 0;
        }
        self.difficulty.base_score() + self.time_remaining / 5
    }

    /// Stars for a solved round: 3 above 70% of the budget left, 2 above 40%, else 1
    pub fn stars(&self) -> u32 {
        if self.outcome != RoundOutcome::Correct {
            return 0;
        }
        // Integer form of `left > 0.7 * budget` keeps the boundaries exact
        let left = self.time_remaining * 10;
        let budget = self.difficulty.time_budget();
        if left > budget * 7 {
            3
        } else if left > budget * 4 {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HINTS_PER_LEVEL;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn word(w: &str) -> Word {
        Word::new(w, "test hint", None)
    }

    fn round(w: &str, difficulty: Difficulty, seed: u64) -> RoundState {
        let mut rng = Pcg32::seed_from_u64(seed);
        RoundState::start(word(w), difficulty, HINTS_PER_LEVEL, &mut rng)
    }

    /// Select letters so the answer spells `spelling`
    fn spell(round: &mut RoundState, spelling: &str) {
        for c in spelling.chars() {
            let index = round
                .available
                .iter()
                .position(|&l| l == c)
                .expect("letter in pool");
            round.select_letter(index).unwrap();
        }
    }

    fn sorted(letters: &[char]) -> Vec<char> {
        let mut v = letters.to_vec();
        v.sort_unstable();
        v
    }

    fn holds_pool(round: &RoundState) -> bool {
        let mut both = round.available.clone();
        both.extend_from_slice(&round.selected);
        sorted(&both) == sorted(round.pool())
    }

    #[test]
    fn test_cow_scenario() {
        let mut r = round("cow", Difficulty::Easy, 7);
        assert_eq!(r.pool().len(), 5);
        assert_eq!(r.time_remaining, 60);
        spell(&mut r, "cow");
        assert_eq!(r.check(), Ok(RoundOutcome::Correct));
        assert_eq!(r.score(), 22);
        assert_eq!(r.stars(), 3);
    }

    #[test]
    fn test_start_resets_state() {
        let r = round("goat", Difficulty::Hard, 1);
        assert!(r.selected.is_empty());
        assert_eq!(r.available, r.pool);
        assert_eq!(r.outcome, RoundOutcome::Pending);
        assert_eq!(r.time_remaining, 30);
        assert_eq!(r.pool().len(), 4 + 6);
    }

    #[test]
    fn test_same_seed_same_pool() {
        let a = round("banana", Difficulty::Medium, 42);
        let b = round("banana", Difficulty::Medium, 42);
        assert_eq!(a.pool(), b.pool());
    }

    #[test]
    fn test_select_out_of_bounds() {
        let mut r = round("pig", Difficulty::Easy, 3);
        let before = r.available.clone();
        assert_eq!(
            r.select_letter(99),
            Err(RoundError::InvalidIndex { index: 99, len: 5 })
        );
        assert_eq!(r.available, before);
        assert!(r.selected.is_empty());
    }

    #[test]
    fn test_deselect_appends_to_pool() {
        let mut r = round("hen", Difficulty::Easy, 5);
        let first = r.select_letter(0).unwrap();
        let second = r.select_letter(0).unwrap();
        assert_eq!(r.selected, vec![first, second]);

        assert_eq!(r.deselect_letter(0), Ok(first));
        assert_eq!(r.available.last(), Some(&first));
        assert_eq!(r.selected, vec![second]);
        assert!(matches!(
            r.deselect_letter(1),
            Err(RoundError::InvalidIndex { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_wrong_spelling_is_incorrect() {
        let mut r = round("cow", Difficulty::Easy, 11);
        spell(&mut r, "woc");
        assert_eq!(r.check(), Ok(RoundOutcome::Incorrect));
        assert_eq!(r.score(), 0);
        assert_eq!(r.stars(), 0);
    }

    #[test]
    fn test_check_is_case_insensitive() {
        let mut r = round("duck", Difficulty::Easy, 2);
        spell(&mut r, "duck");
        r.selected[0] = 'D';
        assert_eq!(r.check(), Ok(RoundOutcome::Correct));
    }

    #[test]
    fn test_check_empty_selection() {
        let mut r = round("cow", Difficulty::Easy, 1);
        assert_eq!(r.check(), Err(RoundError::EmptySelection));
        assert!(r.is_pending());
    }

    #[test]
    fn test_resolved_round_is_frozen() {
        let mut r = round("cow", Difficulty::Easy, 9);
        spell(&mut r, "co");
        r.check().unwrap();
        assert!(r.select_letter(0).is_err());
        assert!(r.deselect_letter(0).is_err());
        assert_eq!(r.check(), Err(RoundError::Resolved));
    }

    #[test]
    fn test_reset_after_incorrect_allows_retry() {
        let mut r = round("cow", Difficulty::Easy, 13);
        spell(&mut r, "wo");
        assert_eq!(r.check(), Ok(RoundOutcome::Incorrect));

        r.reset_selection().unwrap();
        assert!(r.is_pending());
        assert!(r.selected.is_empty());
        assert_eq!(r.available.len(), 5);

        spell(&mut r, "cow");
        assert_eq!(r.check(), Ok(RoundOutcome::Correct));
    }

    #[test]
    fn test_reset_refused_once_correct() {
        let mut r = round("cow", Difficulty::Easy, 13);
        spell(&mut r, "cow");
        r.check().unwrap();
        assert_eq!(r.reset_selection(), Err(RoundError::Resolved));
        assert_eq!(r.attempt(), "cow");
        assert_eq!(r.outcome, RoundOutcome::Correct);
    }

    #[test]
    fn test_hint_places_next_letter() {
        let mut r = round("cow", Difficulty::Easy, 21);
        assert_eq!(r.use_hint(), Some('c'));
        assert_eq!(r.use_hint(), Some('o'));
        assert_eq!(r.attempt(), "co");
        assert_eq!(r.hints_remaining, 1);
    }

    #[test]
    fn test_hint_without_hints_is_noop() {
        let mut r = round("cow", Difficulty::Easy, 21);
        r.hints_remaining = 0;
        let available = r.available.clone();
        assert_eq!(r.use_hint(), None);
        assert_eq!(r.available, available);
        assert!(r.selected.is_empty());
    }

    #[test]
    fn test_hint_spent_when_next_letter_already_used() {
        let mut r = round("cow", Difficulty::Easy, 0);
        r.pool = vec!['w', 'x', 'o', 'c', 'z'];
        r.available = r.pool.clone();
        // Pick the only 'o' first; the hint then wants an 'o' the pool lacks
        spell(&mut r, "o");
        let available = r.available.clone();

        assert_eq!(r.use_hint(), None);
        assert_eq!(r.hints_remaining, HINTS_PER_LEVEL - 1);
        assert_eq!(r.available, available);
        assert_eq!(r.selected, vec!['o']);
        assert!(r.is_pending());
    }

    #[test]
    fn test_hint_spent_when_word_already_spelled() {
        let mut r = round("cow", Difficulty::Easy, 21);
        // Answer already as long as the word: nothing left to place
        spell(&mut r, "cow");
        assert_eq!(r.use_hint(), None);
        assert_eq!(r.hints_remaining, HINTS_PER_LEVEL - 1);
        assert_eq!(r.attempt(), "cow");
    }

    #[test]
    fn test_hint_refused_after_resolve() {
        let mut r = round("cow", Difficulty::Easy, 21);
        spell(&mut r, "cow");
        r.check().unwrap();
        assert_eq!(r.use_hint(), None);
        assert_eq!(r.hints_remaining, HINTS_PER_LEVEL);
    }

    #[test]
    fn test_timer_expires_on_last_tick() {
        let mut r = round("cow", Difficulty::Easy, 4);
        for _ in 0..59 {
            assert!(!r.tick());
        }
        assert!(r.tick());
        assert_eq!(r.time_remaining, 0);
        assert_eq!(r.outcome, RoundOutcome::Incorrect);
        assert!(r.is_expired());

        // Floored and silent afterwards
        assert!(!r.tick());
        assert_eq!(r.time_remaining, 0);
        assert_eq!(r.reset_selection(), Err(RoundError::Resolved));
    }

    #[test]
    fn test_tick_stops_once_resolved() {
        let mut r = round("cow", Difficulty::Easy, 4);
        spell(&mut r, "cow");
        r.check().unwrap();
        assert!(!r.tick());
        assert_eq!(r.time_remaining, 60);
    }

    #[test]
    fn test_star_boundaries() {
        let mut r = round("cow", Difficulty::Easy, 8);
        spell(&mut r, "cow");
        r.check().unwrap();

        // 70% of 60 is 42, 40% is 24
        for (left, stars) in [(60, 3), (43, 3), (42, 2), (25, 2), (24, 1), (0, 1)] {
            r.time_remaining = left;
            assert_eq!(r.stars(), stars, "time left {}", left);
        }
        r.time_remaining = 42;
        assert_eq!(r.score(), 10 + 8);
    }

    #[test]
    fn test_forfeit() {
        let mut r = round("cow", Difficulty::Easy, 8);
        r.forfeit();
        assert_eq!(r.outcome, RoundOutcome::Incorrect);
    }

    proptest! {
        #[test]
        fn prop_pool_is_word_plus_noise(
            w in "[a-z]{1,10}",
            d in 0usize..3,
            seed in any::<u64>(),
        ) {
            let difficulty = Difficulty::ALL[d];
            let r = round(&w, difficulty, seed);
            prop_assert_eq!(r.pool().len(), w.len() + difficulty.extra_letters());
            prop_assert!(r.pool().iter().all(|c| c.is_ascii_lowercase()));

            // Every word letter is in the pool, with multiplicity
            let mut rest = r.pool().to_vec();
            for c in w.chars() {
                let i = rest.iter().position(|&l| l == c);
                prop_assert!(i.is_some());
                rest.swap_remove(i.unwrap());
            }
            prop_assert_eq!(rest.len(), difficulty.extra_letters());
        }

        #[test]
        fn prop_letters_never_lost(
            seed in any::<u64>(),
            ops in prop::collection::vec((any::<bool>(), 0usize..12), 0..40),
        ) {
            let mut r = round("purple", Difficulty::Medium, seed);
            for (select, index) in ops {
                let _ = if select { r.select_letter(index) } else { r.deselect_letter(index) };
                prop_assert_eq!(r.available.len() + r.selected.len(), r.pool().len());
                prop_assert!(holds_pool(&r));
            }
            let _ = r.reset_selection();
            prop_assert!(holds_pool(&r));
        }

        #[test]
        fn prop_check_matches_spelling(
            seed in any::<u64>(),
            picks in prop::collection::vec(0usize..9, 1..9),
        ) {
            let mut r = round("tiger", Difficulty::Medium, seed);
            for index in picks {
                let _ = r.select_letter(index % r.available.len().max(1));
            }
            let spelled = r.attempt();
            let outcome = r.check().unwrap();
            prop_assert_eq!(outcome == RoundOutcome::Correct, spelled == "tiger");
        }

        #[test]
        fn prop_stars_non_increasing(d in 0usize..3) {
            let difficulty = Difficulty::ALL[d];
            let mut r = round("cow", difficulty, 1);
            spell(&mut r, "cow");
            r.check().unwrap();
            let mut last = u32::MAX;
            for left in (0..=difficulty.time_budget()).rev() {
                r.time_remaining = left;
                let stars = r.stars();
                prop_assert!((1..=3).contains(&stars));
                prop_assert!(stars <= last);
                last = stars;
            }
        }
    }
}
