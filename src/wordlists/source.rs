//! Secret word selection
//!
//! The game only sees the [`WordSource`] trait; [`RandomWords`] is the production source
//! drawing uniformly from per-difficulty [`WordLists`].

use super::loader::words_from_slice;
use super::{EASY, HARD, MEDIUM};
use crate::core::{Difficulty, SecretWord};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Supplies a secret word for a difficulty group
pub trait WordSource {
    /// Draw a word from the bucket for `difficulty`
    ///
    /// Each call is an independent draw.
    fn random_word(&mut self, difficulty: Difficulty) -> SecretWord;
}

/// Candidate secret words, one bucket per difficulty group
///
/// Every bucket is non-empty.
#[derive(Debug, Clone)]
pub struct WordLists {
    easy: Vec<SecretWord>,
    medium: Vec<SecretWord>,
    hard: Vec<SecretWord>,
}

impl WordLists {
    /// Word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            easy: words_from_slice(EASY),
            medium: words_from_slice(MEDIUM),
            hard: words_from_slice(HARD),
        }
    }

    /// Build lists from custom buckets
    ///
    /// An empty bucket falls back to the embedded list for that group.
    #[must_use]
    pub fn with_fallback(
        easy: Vec<SecretWord>,
        medium: Vec<SecretWord>,
        hard: Vec<SecretWord>,
    ) -> Self {
        let embedded = Self::embedded();
        let pick = |custom: Vec<SecretWord>, fallback: Vec<SecretWord>| {
            if custom.is_empty() {
                fallback
            } else {
                custom
            }
        };

        Self {
            easy: pick(easy, embedded.easy),
            medium: pick(medium, embedded.medium),
            hard: pick(hard, embedded.hard),
        }
    }

    /// Words available for a difficulty group
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> &[SecretWord] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Uniform random draws from [`WordLists`]
pub struct RandomWords {
    lists: WordLists,
    rng: StdRng,
}

impl RandomWords {
    /// Random source seeded from the operating system
    #[must_use]
    pub fn new(lists: WordLists) -> Self {
        Self {
            lists,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible source for a given seed
    #[must_use]
    pub fn with_seed(lists: WordLists, seed: u64) -> Self {
        Self {
            lists,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl WordSource for RandomWords {
    /// # Panics
    /// Panics if the bucket is empty, which `WordLists` rules out on construction.
    fn random_word(&mut self, difficulty: Difficulty) -> SecretWord {
        self.lists
            .get(difficulty)
            .choose(&mut self.rng)
            .cloned()
            .expect("word lists are never empty")
    }
}

/// Word sources with known output, for tests
#[cfg(test)]
pub(crate) mod testing {
    use super::WordSource;
    use crate::core::{Difficulty, SecretWord};
    use std::collections::VecDeque;

    /// Hands out the given words in order, then repeats the last one
    pub(crate) struct ScriptedWords {
        words: VecDeque<SecretWord>,
        pub(crate) requested: Vec<Difficulty>,
    }

    impl ScriptedWords {
        pub(crate) fn new(words: &[&str]) -> Self {
            Self {
                words: words.iter().map(|w| SecretWord::new(*w).unwrap()).collect(),
                requested: Vec::new(),
            }
        }
    }

    impl WordSource for ScriptedWords {
        fn random_word(&mut self, difficulty: Difficulty) -> SecretWord {
            self.requested.push(difficulty);
            if self.words.len() > 1 {
                self.words.pop_front().unwrap()
            } else {
                self.words.front().cloned().unwrap()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_buckets_are_non_empty() {
        let lists = WordLists::embedded();
        for difficulty in Difficulty::ALL {
            assert!(!lists.get(difficulty).is_empty());
        }
    }

    #[test]
    fn fallback_fills_empty_buckets() {
        let custom = vec![SecretWord::new("rust").unwrap()];
        let lists = WordLists::with_fallback(custom, Vec::new(), Vec::new());

        assert_eq!(lists.get(Difficulty::Easy).len(), 1);
        assert_eq!(lists.get(Difficulty::Medium).len(), MEDIUM.len());
        assert_eq!(lists.get(Difficulty::Hard).len(), HARD.len());
    }

    #[test]
    fn random_word_comes_from_requested_bucket() {
        let lists = WordLists::embedded();
        let mut source = RandomWords::with_seed(lists.clone(), 7);

        for difficulty in Difficulty::ALL {
            for _ in 0..20 {
                let word = source.random_word(difficulty);
                assert!(lists.get(difficulty).contains(&word));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_words() {
        let mut a = RandomWords::with_seed(WordLists::embedded(), 42);
        let mut b = RandomWords::with_seed(WordLists::embedded(), 42);

        for _ in 0..10 {
            assert_eq!(
                a.random_word(Difficulty::Hard),
                b.random_word(Difficulty::Hard)
            );
        }
    }

    #[test]
    fn scripted_words_repeat_last() {
        let mut source = testing::ScriptedWords::new(&["cat", "dog"]);
        assert_eq!(source.random_word(Difficulty::Easy).text(), "cat");
        assert_eq!(source.random_word(Difficulty::Hard).text(), "dog");
        assert_eq!(source.random_word(Difficulty::Hard).text(), "dog");
        assert_eq!(
            source.requested,
            vec![Difficulty::Easy, Difficulty::Hard, Difficulty::Hard]
        );
    }
}
