//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear rules.

mod game;
mod word;

pub use game::{Game, GuessResult, MAX_MISSES, Outcome};
pub use word::{Word, WordError};
