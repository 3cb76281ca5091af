//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, plus the
//! [`WordLists`] container the session draws from. Two lists exist: the
//! allowed list (every word accepted as a guess) and the answer list (words
//! the game may pick as the secret). Every answer must also be allowed.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::{WORD_LEN, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// The fixed allowed-word and answer-word sets for a game
#[derive(Debug, Clone)]
pub struct WordLists {
    valid: Vec<Word>,
    answers: Vec<Word>,
    membership: FxHashSet<[u8; WORD_LEN]>,
}

/// Error type for malformed word-list pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The answer list is empty, so no game can start
    NoAnswers,
    /// An answer word is missing from the allowed list
    AnswerNotAllowed(String),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "Answer list is empty"),
            Self::AnswerNotAllowed(word) => {
                write!(f, "Answer word '{word}' is not in the allowed list")
            }
        }
    }
}

impl std::error::Error for WordListError {}

impl WordLists {
    /// Build a list pair, enforcing the answers-are-allowed invariant
    ///
    /// # Errors
    /// Returns `WordListError` if `answers` is empty or contains a word
    /// missing from `valid`.
    pub fn new(valid: Vec<Word>, answers: Vec<Word>) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::NoAnswers);
        }

        let membership: FxHashSet<[u8; WORD_LEN]> = valid.iter().map(|w| *w.chars()).collect();

        if let Some(stray) = answers.iter().find(|w| !membership.contains(w.chars())) {
            return Err(WordListError::AnswerNotAllowed(stray.text().to_string()));
        }

        Ok(Self {
            valid,
            answers,
            membership,
        })
    }

    /// Build from the word lists embedded in the binary
    ///
    /// # Errors
    /// Returns `WordListError` if the embedded lists violate the subset
    /// invariant (guarded by tests, so this does not happen in practice).
    pub fn embedded() -> Result<Self, WordListError> {
        let valid = loader::words_from_slice(ALLOWED);
        let answers = loader::words_from_slice(ANSWERS);
        Self::new(valid, answers)
    }

    /// Check whether a word is an acceptable guess
    #[must_use]
    pub fn is_valid(&self, word: &Word) -> bool {
        self.membership.contains(word.chars())
    }

    /// Pick an answer uniformly at random from the answer list
    ///
    /// # Panics
    /// Will not panic: the constructor rejects empty answer lists.
    #[must_use]
    pub fn pick_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.answers
            .choose(rng)
            .expect("answer list is never empty")
    }

    /// All acceptable guess words
    #[must_use]
    pub fn valid(&self) -> &[Word] {
        &self.valid
    }

    /// All possible answer words
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}
