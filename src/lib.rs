//! Terminal Wordle
//!
//! A terminal word-guessing game: six tries to find a hidden five-letter
//! word, with colored per-letter feedback and a keyboard-style letter board.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle::core::{Feedback, LetterScore, UsedLetters};
//!
//! let mut used = UsedLetters::new();
//! let feedback = Feedback::score(b"CRANE", b"SLATE", &mut used).unwrap();
//!
//! // C(absent) R(absent) A(correct) N(absent) E(correct)
//! assert_eq!(feedback.get(2), Some(LetterScore::Correct));
//! assert_eq!(used.status(b'A'), Some(LetterScore::Correct));
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Terminal presentation and input
pub mod ui;
