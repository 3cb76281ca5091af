//! Menu navigation and the interactive game loop
//!
//! Thin line-mode wrapper around [`Session`]: prompts, menu keys, rules, and
//! the win/lose screens. All game rules live in the `core` and `game`
//! modules; this file only reads lines and prints colored output.

use super::display::{print_history, print_letter_board};
use crate::game::{MAX_GUESSES, Session};
use crate::wordlists::WordLists;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

const TITLE: &str = r"
__        __            _ _
\ \      / /__  _ __ __| | | ___
 \ \ /\ / / _ \| '__/ _` | |/ _ \
  \ V  V / (_) | | | (_| | |  __/
   \_/\_/ \___/|_|  \__,_|_|\___|
";

/// Run the title screen and menu until the player quits
///
/// # Errors
/// Returns an error only on I/O failure reading stdin or flushing stdout.
pub fn run<R: Rng + ?Sized>(lists: &WordLists, rng: &mut R) -> io::Result<()> {
    println!("{TITLE}");
    print_menu();

    loop {
        let Some(input) = prompt("Command")? else {
            // stdin closed
            return Ok(());
        };

        match input.as_str() {
            "p" => {
                play(lists, rng)?;
                print_menu();
            }
            "r" => {
                print_rules()?;
                print_menu();
            }
            "q" => {
                println!("Thanks for playing!");
                return Ok(());
            }
            _ => println!("Invalid option."),
        }
    }
}

fn print_menu() {
    println!("Options\t\tKey");
    println!("-------\t\t---");
    println!("Play\t\t p");
    println!("Rules\t\t r");
    println!("Quit\t\t q");
    println!();
}

fn print_rules() -> io::Result<()> {
    println!("Attempt to guess a randomly selected 5-letter word.");
    println!("You get {MAX_GUESSES} guesses to get the right word.");
    println!("After guessing, your guess is displayed with colors meaning:");
    println!("{}", "Gray - The letter is not in the word.".bright_black());
    println!(
        "{}",
        "Yellow - The letter is in the word but in the wrong position.".yellow()
    );
    println!(
        "{}",
        "Green - The letter is in the word and in the right position.".green()
    );
    println!("If all guesses are exhausted, the answer is revealed. Good luck word nerd!");
    pause()
}

/// One full game: prompt for guesses until a win or the budget runs out
fn play<R: Rng + ?Sized>(lists: &WordLists, rng: &mut R) -> io::Result<()> {
    let mut session = Session::start(lists, rng);

    println!("Guess the word!");

    while !session.is_over() {
        let Some(guess) = prompt("Guess")? else {
            return Ok(());
        };

        match session.submit_guess(&guess) {
            // Rejected guesses cost nothing; report and re-prompt
            Err(err) => println!("{err}"),
            Ok(_) => {
                print_history(session.history());
                print_letter_board(session.used_letters());

                if session.has_won(&guess) {
                    println!("You got it!");
                    println!("Guesses: {}/{MAX_GUESSES}", session.guess_count());
                    return pause();
                }
            }
        }
    }

    if let Some(answer) = session.answer() {
        println!("Nice try! The word was '{answer}'.");
    }
    pause()
}

fn pause() -> io::Result<()> {
    println!("Hit enter to return to the menu.");
    read_line().map(|_| ())
}

/// Print a prompt and read one trimmed line; `None` once stdin is closed
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    read_line()
}

fn read_line() -> io::Result<Option<String>> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;

    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(input.trim().to_string()))
    }
}
