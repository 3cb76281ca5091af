//! Colored rendering of guesses and letter knowledge

use crate::core::{Feedback, LetterScore, UsedLetters, Word};
use colored::Colorize;

/// Apply the hint color for a score
///
/// Gray for absent, yellow for misplaced, green for correct.
fn paint(text: &str, score: LetterScore) -> String {
    match score {
        LetterScore::Absent => text.bright_black().to_string(),
        LetterScore::Misplaced => text.yellow().to_string(),
        LetterScore::Correct => text.green().to_string(),
    }
}

/// Print every guess so far, each letter colored by its feedback
pub fn print_history(history: &[(Word, Feedback)]) {
    for (word, feedback) in history {
        let line: String = word
            .text()
            .chars()
            .zip(feedback.iter())
            .map(|(letter, score)| paint(&letter.to_string(), score))
            .collect();
        println!("{line}");
    }
}

/// Print the alphabet in two rows, colored by best-known letter status
///
/// Letters never guessed stay uncolored.
pub fn print_letter_board(used: &UsedLetters) {
    let mut line = String::new();

    for letter in b'A'..=b'Z' {
        let text = char::from(letter).to_string();
        match used.status(letter) {
            Some(score) => line.push_str(&paint(&text, score)),
            None => line.push_str(&text),
        }
        line.push(' ');

        if letter == b'M' || letter == b'Z' {
            println!("{line}");
            line.clear();
        }
    }
}
