//! Core domain types for the game
//!
//! Pure, in-memory types with no I/O: words, per-guess feedback, and the
//! session-wide used-letter map. Everything here is deterministic and
//! directly testable.

mod feedback;
mod used_letters;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterScore};
pub use used_letters::UsedLetters;
pub use word::{WORD_LEN, Word, WordError};
