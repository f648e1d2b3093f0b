//! Hangman
//!
//! A terminal hangman game with phrase support and staged gallows drawings.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, GuessResult, Outcome, Word};
//!
//! // Start a game on a known word
//! let word = Word::new("Window").unwrap();
//! let mut game = Game::with_word(word);
//!
//! // The first and last letters start revealed
//! assert_eq!(game.progress(), "W _ _ _ _ w ");
//!
//! // Guess the rest
//! for letter in ["i", "n", "d", "o"] {
//!     assert_eq!(game.guess(letter), GuessResult::Correct);
//! }
//! assert_eq!(game.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Gallows drawings
pub mod gallows;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
