//! Build script to generate embedded word lists
//!
//! Reads the word list files under `data/` and generates Rust source with
//! const arrays for the wordlists module.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    // Possible secret words
    generate_word_list(
        "data/answers.txt",
        &out_dir.join("answers.rs"),
        "ANSWERS",
        "Words the game may pick as the answer",
    );

    // Every word accepted as a guess (superset of the answers)
    generate_word_list(
        "data/allowed.txt",
        &out_dir.join("allowed.rs"),
        "ALLOWED",
        "Words accepted as guesses",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    let mut source = format!("// Generated from {input_path}\n\n/// {doc_comment}\n");
    writeln!(source, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(source, "    \"{word}\",").unwrap();
    }
    writeln!(source, "];").unwrap();
    writeln!(source, "\n/// Number of words in {const_name}").unwrap();
    writeln!(source, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();

    fs::write(output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
