//! Build script to embed the dictionary and the gallows art
//!
//! Reads the data files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// One drawing per miss count, stage 0 through stage 7
const STAGE_COUNT: usize = 8;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate the dictionary
    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Candidate words and phrases for the hangman dictionary",
    );

    // Generate the gallows stage set
    generate_stage_set(
        "data/gallows",
        &Path::new(&out_dir).join("stages.rs"),
        "STAGES",
        "Gallows drawings keyed by miss count (stage 0 is the empty gallows)",
    );

    // Rebuild if the data files change
    println!("cargo:rerun-if-changed=data/words.txt");
    println!("cargo:rerun-if-changed=data/gallows");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn generate_stage_set(input_dir: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated gallows art").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for stage in 0..STAGE_COUNT {
        let input_path = format!("{input_dir}/stage{stage}.txt");
        let art = fs::read_to_string(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

        // Debug formatting produces a properly escaped string literal; the
        // drawings are full of backslashes.
        writeln!(output, "    {art:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of stages in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {STAGE_COUNT};").unwrap();
}
