//! Terminal presentation and input
//!
//! The external collaborators around the game core: ANSI-colored rendering
//! of guesses and the letter board, plus menu navigation and line input.

pub mod display;
pub mod menu;

pub use menu::run;
