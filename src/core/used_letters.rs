//! Session-wide letter knowledge
//!
//! Tracks the best classification ever observed for each letter across all
//! guesses in a session, for keyboard-style hint rendering.

use super::feedback::LetterScore;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Best-known classification per upper-case ASCII letter
///
/// Scores only ever improve: once a letter is recorded as `Correct` no later
/// observation can downgrade it, and `Misplaced` never drops back to `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedLetters {
    scores: FxHashMap<u8, LetterScore>,
}

impl UsedLetters {
    /// Create an empty map (no letters observed yet)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation for a letter
    ///
    /// Keeps the more informative of the stored and the new score, so a
    /// letter's status is the join of everything seen this session.
    pub fn record(&mut self, letter: u8, score: LetterScore) {
        match self.scores.entry(letter) {
            Entry::Occupied(mut slot) => {
                if score > *slot.get() {
                    slot.insert(score);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(score);
            }
        }
    }

    /// Best-known score for a letter, or `None` if it was never guessed
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterScore> {
        self.scores.get(&letter).copied()
    }

    /// Number of distinct letters observed
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if no letters have been observed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over observed letters and their best scores
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterScore)> + '_ {
        self.scores.iter().map(|(&letter, &score)| (letter, score))
    }
}
