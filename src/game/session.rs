//! Game session state
//!
//! A [`Session`] holds the running state of one game: the secret answer, the
//! ordered guess history with its feedback, and the used-letter map. The game
//! loop owns exactly one session at a time and drives it sequentially; there
//! is no shared or global state.

use crate::core::{Feedback, FeedbackError, UsedLetters, Word};
use crate::wordlists::WordLists;
use rand::Rng;
use std::fmt;

/// Maximum number of accepted guesses per game
///
/// The session only reports its guess count; stopping at the budget is the
/// game loop's job.
pub const MAX_GUESSES: usize = 6;

/// State of one game in progress
#[derive(Debug, Clone)]
pub struct Session<'a> {
    lists: &'a WordLists,
    answer: Word,
    history: Vec<(Word, Feedback)>,
    used: UsedLetters,
    won: bool,
}

/// Error type for rejected guesses
///
/// Every variant is recoverable: the caller reports the message and
/// re-prompts without consuming a guess attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The guess is not in the allowed-word list (covers wrong lengths too)
    InvalidWord,
    /// The word was already guessed this session
    DuplicateGuess,
    /// Guess and answer lengths differ; cannot happen while the word-list
    /// invariant holds, but handled rather than assumed away
    LengthMismatch(FeedbackError),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord => write!(f, "Must be a valid word."),
            Self::DuplicateGuess => write!(f, "Word has already been guessed."),
            Self::LengthMismatch(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LengthMismatch(err) => Some(err),
            _ => None,
        }
    }
}

impl<'a> Session<'a> {
    /// Start a new game with an answer picked from the answer list
    ///
    /// The randomness source is injected so games can be reproduced from a
    /// seed; the binary supplies an OS-seeded generator.
    pub fn start<R: Rng + ?Sized>(lists: &'a WordLists, rng: &mut R) -> Self {
        let answer = lists.pick_answer(rng).clone();
        Self::with_answer(lists, answer)
    }

    /// Start a new game with a fixed answer
    ///
    /// Used by tests; `answer` should be a member of the answer list so the
    /// word-list invariant holds.
    #[must_use]
    pub fn with_answer(lists: &'a WordLists, answer: Word) -> Self {
        Self {
            lists,
            answer,
            history: Vec::new(),
            used: UsedLetters::new(),
            won: false,
        }
    }

    /// Submit a guess for this session
    ///
    /// The text is normalized (trimmed, upper-cased) once here; everything
    /// downstream works with canonical words. On success the guess and its
    /// feedback are appended to the history and the feedback is returned.
    ///
    /// # Errors
    /// - [`GuessError::InvalidWord`] if the text is not an allowed word
    /// - [`GuessError::DuplicateGuess`] if the word was already guessed
    /// - [`GuessError::LengthMismatch`] if scoring fails; history and
    ///   used-letters are left untouched
    pub fn submit_guess(&mut self, text: &str) -> Result<Feedback, GuessError> {
        let guess = Word::new(text).map_err(|_| GuessError::InvalidWord)?;

        if !self.lists.is_valid(&guess) {
            return Err(GuessError::InvalidWord);
        }

        if self.history.iter().any(|(past, _)| *past == guess) {
            return Err(GuessError::DuplicateGuess);
        }

        let feedback = Feedback::score(guess.as_bytes(), self.answer.as_bytes(), &mut self.used)
            .map_err(GuessError::LengthMismatch)?;

        if feedback.is_win() {
            self.won = true;
        }
        self.history.push((guess, feedback.clone()));

        Ok(feedback)
    }

    /// Whether `text` matches the answer (case-insensitive)
    #[must_use]
    pub fn has_won(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| word == self.answer)
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    /// Accepted guesses and their feedback, in submission order
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Best-known status of every guessed letter
    #[must_use]
    pub fn used_letters(&self) -> &UsedLetters {
        &self.used
    }

    /// True once the game is won or the guess budget is spent
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.won || self.history.len() >= MAX_GUESSES
    }

    /// The answer, revealed only once the game is over
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        self.is_over().then_some(&self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lists() -> WordLists {
        WordLists::new(
            words_from_slice(&[
                "vilag", "valid", "folds", "piety", "crane", "slate", "irate", "fjord", "mount",
            ]),
            words_from_slice(&["vilag", "crane", "slate"]),
        )
        .unwrap()
    }

    fn session<'a>(lists: &'a WordLists, answer: &str) -> Session<'a> {
        Session::with_answer(lists, Word::new(answer).unwrap())
    }

    #[test]
    fn start_picks_answer_from_answer_list() {
        let lists = lists();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..10 {
            let game = Session::start(&lists, &mut rng);
            assert_eq!(game.guess_count(), 0);
            assert!(game.used_letters().is_empty());
            assert!(!game.is_over());
        }
    }

    #[test]
    fn valid_guess_recorded_with_feedback() {
        let lists = lists();
        let mut game = session(&lists, "vilag");

        let feedback = game.submit_guess("valid").unwrap();
        assert_eq!(
            feedback.iter().collect::<Vec<_>>(),
            vec![
                LetterScore::Correct,
                LetterScore::Misplaced,
                LetterScore::Correct,
                LetterScore::Misplaced,
                LetterScore::Absent
            ]
        );

        assert_eq!(game.guess_count(), 1);
        assert_eq!(game.history()[0].0.text(), "VALID");
        assert_eq!(game.history()[0].1, feedback);
        assert_eq!(
            game.used_letters().status(b'V'),
            Some(LetterScore::Correct)
        );
        assert_eq!(
            game.used_letters().status(b'D'),
            Some(LetterScore::Absent)
        );
    }

    #[test]
    fn used_letters_accumulate_across_guesses() {
        let lists = lists();
        let mut game = session(&lists, "vilag");

        game.submit_guess("valid").unwrap();
        game.submit_guess("folds").unwrap();

        // Second guess adds letters without downgrading earlier knowledge
        let used = game.used_letters();
        assert_eq!(used.status(b'L'), Some(LetterScore::Correct));
        assert_eq!(used.status(b'F'), Some(LetterScore::Absent));
        assert_eq!(used.status(b'O'), Some(LetterScore::Absent));
        assert_eq!(used.status(b'S'), Some(LetterScore::Absent));
        assert_eq!(used.len(), 8);
    }

    #[test]
    fn invalid_word_rejected_without_mutation() {
        let lists = lists();
        let mut game = session(&lists, "vilag");

        for bad in ["aaaaa", "aaaa", "aaaaaa", ""] {
            assert_eq!(game.submit_guess(bad), Err(GuessError::InvalidWord));
        }

        assert_eq!(game.guess_count(), 0);
        assert!(game.used_letters().is_empty());
    }

    #[test]
    fn duplicate_guess_rejected_without_mutation() {
        let lists = lists();
        let mut game = session(&lists, "vilag");

        game.submit_guess("folds").unwrap();
        let used_before = game.used_letters().clone();

        // Same word again, in a different case
        assert_eq!(game.submit_guess("FOLDS"), Err(GuessError::DuplicateGuess));
        assert_eq!(game.guess_count(), 1);
        assert_eq!(*game.used_letters(), used_before);
    }

    #[test]
    fn has_won_is_case_insensitive_equality() {
        let lists = lists();
        let game = session(&lists, "vilag");

        assert!(game.has_won("vilag"));
        assert!(game.has_won("VILAG"));
        assert!(game.has_won(" vilag "));
        assert!(!game.has_won("valid"));
        assert!(!game.has_won(""));
    }

    #[test]
    fn winning_guess_ends_the_game() {
        let lists = lists();
        let mut game = session(&lists, "crane");

        assert!(game.answer().is_none());

        let feedback = game.submit_guess("crane").unwrap();
        assert!(feedback.is_win());
        assert!(game.is_over());
        assert_eq!(game.answer().map(Word::text), Some("CRANE"));
    }

    #[test]
    fn exhausting_the_budget_ends_the_game() {
        let lists = lists();
        let mut game = session(&lists, "crane");

        for guess in ["valid", "folds", "piety", "slate", "irate", "fjord"] {
            assert!(!game.is_over());
            assert!(game.answer().is_none());
            game.submit_guess(guess).unwrap();
        }

        assert_eq!(game.guess_count(), MAX_GUESSES);
        assert!(game.is_over());
        assert_eq!(game.answer().map(Word::text), Some("CRANE"));
    }

    #[test]
    fn rejected_guesses_consume_no_attempts() {
        let lists = lists();
        let mut game = session(&lists, "crane");

        game.submit_guess("valid").unwrap();
        let _ = game.submit_guess("valid");
        let _ = game.submit_guess("zzzzz");
        let _ = game.submit_guess("not a word");

        assert_eq!(game.guess_count(), 1);
    }
}
