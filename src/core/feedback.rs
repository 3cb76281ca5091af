//! Guess feedback calculation and representation
//!
//! Scoring a guess against the answer follows Wordle's rules, including the
//! duplicate-letter pitfall: a letter that appears once in the answer but
//! twice in the guess yields one `Misplaced` and one `Absent`, never two
//! `Misplaced`.

use super::used_letters::UsedLetters;
use rustc_hash::FxHashMap;
use std::fmt;

/// Classification of a single guess position
///
/// Ordered by informativeness: `Correct > Misplaced > Absent`. The ordering
/// drives the [`UsedLetters`] merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterScore {
    /// The letter is not in the word (or its occurrences are all claimed)
    Absent,
    /// The letter is in the word but in the wrong position
    Misplaced,
    /// The letter is in the word and in the correct position
    Correct,
}

/// Per-position feedback for one guess, immutable once produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    scores: Vec<LetterScore>,
}

/// Error type for feedback calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackError {
    /// Guess and answer lengths differ
    LengthMismatch { guess: usize, answer: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, answer } => {
                write!(
                    f,
                    "Guess is {guess} letters but the answer is {answer} letters"
                )
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Score `guess` against `answer`, recording every letter in `used`
    ///
    /// Both inputs are byte sequences of upper-case ASCII letters. The game
    /// always passes five-letter words, but the algorithm works for any
    /// matching length.
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches become `Correct` and claim one
    ///    occurrence of their letter in the answer.
    /// 2. Second pass: every remaining position is `Misplaced` while
    ///    unclaimed occurrences of its letter are left, `Absent` after.
    ///
    /// # Errors
    /// Returns [`FeedbackError::LengthMismatch`] if the lengths differ, in
    /// which case `used` is left untouched.
    ///
    /// # Examples
    /// ```
    /// use wordle::core::{Feedback, LetterScore, UsedLetters};
    ///
    /// let mut used = UsedLetters::new();
    /// let feedback = Feedback::score(b"VALID", b"VILAG", &mut used).unwrap();
    /// assert_eq!(feedback.get(0), Some(LetterScore::Correct));
    /// ```
    pub fn score(
        guess: &[u8],
        answer: &[u8],
        used: &mut UsedLetters,
    ) -> Result<Self, FeedbackError> {
        if guess.len() != answer.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: guess.len(),
                answer: answer.len(),
            });
        }

        let mut scores = vec![LetterScore::Absent; guess.len()];
        let mut claimed: FxHashMap<u8, usize> = FxHashMap::default();

        // First pass: exact matches claim their answer occurrence outright
        for (i, &letter) in guess.iter().enumerate() {
            if answer[i] == letter {
                *claimed.entry(letter).or_insert(0) += 1;
                scores[i] = LetterScore::Correct;
                used.record(letter, LetterScore::Correct);
            }
        }

        // Second pass: remaining positions consume what the first pass left
        for (i, &letter) in guess.iter().enumerate() {
            if scores[i] == LetterScore::Correct {
                continue;
            }

            let total = answer.iter().filter(|&&a| a == letter).count();
            let seen = claimed.entry(letter).or_insert(0);
            *seen += 1;

            scores[i] = if *seen <= total {
                LetterScore::Misplaced
            } else {
                LetterScore::Absent
            };
            used.record(letter, scores[i]);
        }

        Ok(Self { scores })
    }

    /// Number of scored positions (equals the guess length)
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if the feedback covers no positions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score at a position, or `None` past the end
    #[must_use]
    pub fn get(&self, position: usize) -> Option<LetterScore> {
        self.scores.get(position).copied()
    }

    /// Iterate over the per-position scores in order
    pub fn iter(&self) -> impl Iterator<Item = LetterScore> + '_ {
        self.scores.iter().copied()
    }

    /// True if every position is `Correct` (a winning guess)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.scores
            .iter()
            .all(|&score| score == LetterScore::Correct)
    }
}
