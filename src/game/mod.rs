//! Game session state machine

mod session;

pub use session::{GuessError, MAX_GUESSES, Session};
