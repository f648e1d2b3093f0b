//! Target word representation
//!
//! A Word stores the phrase to guess along with its distinct letters,
//! normalized for case-insensitive comparison.

use rustc_hash::FxHashSet;
use std::fmt;

/// The word or phrase the player is trying to guess
///
/// Case is preserved for display; letter comparisons are case-insensitive.
/// Interior spaces are allowed (multi-word phrases) and are never guessable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<char>,
    head: char,
    tail: char,
}

/// Error type for invalid dictionary entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters => {
                write!(f, "Word must contain only ASCII letters and spaces")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed; the remainder must be non-empty and
    /// contain only ASCII letters and spaces.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Any character is neither an ASCII letter nor a space
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Milky Way").unwrap();
    /// assert_eq!(word.text(), "Milky Way");
    /// assert!(word.contains_letter('m'));
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("B4d").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_string();

        // A trimmed non-empty string always has first and last characters.
        let (Some(head), Some(tail)) = (text.chars().next(), text.chars().next_back()) else {
            return Err(WordError::Empty);
        };

        if !text.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Ok(Self {
            head: head.to_ascii_lowercase(),
            tail: tail.to_ascii_lowercase(),
            text,
            letters,
        })
    }

    /// Get the phrase as a string slice, original casing intact
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check whether the phrase contains a letter, ignoring case
    #[inline]
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_lowercase())
    }

    /// The distinct normalized letters of the phrase
    ///
    /// Spaces are excluded; revealing every letter in this set wins the game.
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    /// First and last characters of the phrase, normalized
    ///
    /// These are the letters revealed for free at the start of a game. For a
    /// one-character word both are the same letter.
    #[inline]
    #[must_use]
    pub const fn edge_letters(&self) -> (char, char) {
        (self.head, self.tail)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
