//! Word lists for hangman
//!
//! Provides the embedded dictionary compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid_entries() {
        // Trimmed, non-empty, letters and inner spaces only
        for &word in WORDS {
            assert_eq!(word, word.trim(), "Entry '{word}' is not trimmed");
            assert!(!word.is_empty(), "Empty entry in dictionary");
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic() || c == ' '),
                "Entry '{word}' contains unsupported chars"
            );
        }
    }

    #[test]
    fn dictionary_includes_phrases() {
        assert!(
            WORDS.iter().any(|word| word.contains(' ')),
            "Expected at least one multi-word phrase"
        );
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 30, "Expected 30 dictionary entries");
    }
}
