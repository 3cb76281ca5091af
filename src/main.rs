//! Terminal Wordle - CLI
//!
//! Entry point: loads the word lists, seeds the word picker, and hands
//! control to the menu loop.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle::{
    ui,
    wordlists::{ANSWERS, WordLists, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess a hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    /// Seed the word picker for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a custom allowed-word list (the embedded answers stay the
    /// secret pool and must all appear in it)
    #[arg(short = 'w', long)]
    wordlist: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lists = load_wordlists(cli.wordlist.as_deref())?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    ui::run(&lists, &mut rng)?;
    Ok(())
}

/// Load word lists based on the -w flag
fn load_wordlists(custom: Option<&str>) -> Result<WordLists> {
    match custom {
        None => Ok(WordLists::embedded()?),
        Some(path) => {
            let valid = loader::load_from_file(path)?;
            let answers = loader::words_from_slice(ANSWERS);
            Ok(WordLists::new(valid, answers)?)
        }
    }
}
