//! Hangman game state machine
//!
//! Tracks the chosen word, the revealed letters, and the miss count, and
//! classifies every guess. No I/O happens here: the surrounding shell reads
//! input, renders state, and decides when to stop asking.

use super::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Number of wrong guesses that ends the game
///
/// The gallows drawing set has one stage per miss count, `0..=MAX_MISSES`,
/// so the final stage is the complete figure.
pub const MAX_MISSES: usize = 7;

/// Immediate classification of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The letter appears in the word and is now revealed
    Correct,
    /// The letter does not appear; the miss count advanced
    Incorrect,
    /// Input was not exactly one character; nothing changed
    Invalid,
    /// The exit command was given; the session should end
    Exited,
}

/// Terminal/non-terminal classification of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game continues
    Ongoing,
    /// Every letter of the word is revealed
    Won,
    /// The miss limit was reached
    Lost,
    /// The player asked to leave
    Exited,
}

/// Authoritative state for one hangman session
///
/// The revealed set and the miss count only ever grow; the session is over
/// the first time [`outcome`](Self::outcome) is not [`Outcome::Ongoing`].
#[derive(Debug, Clone)]
pub struct Game {
    word: Word,
    revealed: FxHashSet<char>,
    misses: usize,
    exited: bool,
}

impl Game {
    /// Start a game on a word chosen uniformly at random from `words`
    ///
    /// Returns `None` when `words` is empty.
    pub fn new<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Option<Self> {
        words.choose(rng).cloned().map(Self::with_word)
    }

    /// Start a game on a specific word
    ///
    /// The first and last characters of the word are revealed from the start.
    /// Spaces are always shown, so they never enter the revealed set.
    #[must_use]
    pub fn with_word(word: Word) -> Self {
        let (head, tail) = word.edge_letters();
        let mut revealed = FxHashSet::default();
        revealed.insert(head);
        revealed.insert(tail);

        Self {
            word,
            revealed,
            misses: 0,
            exited: false,
        }
    }

    /// Apply one line of player input as a guess
    ///
    /// The input is trimmed first. The literal command `exit` (any letter
    /// case) ends the session without touching the revealed letters or the
    /// miss count; anything else that is not exactly one character is
    /// rejected as [`GuessResult::Invalid`]. Letter comparison is
    /// case-insensitive, and a repeated wrong letter counts as a miss every
    /// time. The engine never terminates the session inside this call;
    /// callers re-check [`outcome`](Self::outcome) after every guess.
    pub fn guess(&mut self, input: &str) -> GuessResult {
        let input = input.trim();

        if input.eq_ignore_ascii_case("exit") {
            self.exited = true;
            return GuessResult::Exited;
        }

        let mut chars = input.chars();
        let Some(letter) = chars.next() else {
            return GuessResult::Invalid;
        };
        if chars.next().is_some() {
            return GuessResult::Invalid;
        }

        let letter = letter.to_ascii_lowercase();
        if self.word.contains_letter(letter) {
            self.revealed.insert(letter);
            GuessResult::Correct
        } else {
            self.misses = MAX_MISSES.min(self.misses + 1);
            GuessResult::Incorrect
        }
    }

    /// Classify the current session state
    ///
    /// Checked in order: exit, then a fully revealed word, then the miss
    /// limit; otherwise the game is still ongoing.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.exited {
            Outcome::Exited
        } else if self
            .word
            .letters()
            .iter()
            .all(|letter| self.revealed.contains(letter))
        {
            Outcome::Won
        } else if self.misses >= MAX_MISSES {
            Outcome::Lost
        } else {
            Outcome::Ongoing
        }
    }

    /// Render the masked word
    ///
    /// Revealed characters keep their original casing, hidden letters show
    /// as `_`, spaces stay spaces. Every position is followed by a single
    /// separating space, trailing separator included.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, Word};
    ///
    /// let game = Game::with_word(Word::new("Window").unwrap());
    /// assert_eq!(game.progress(), "W _ _ _ _ w ");
    /// ```
    #[must_use]
    pub fn progress(&self) -> String {
        let mut out = String::with_capacity(self.word.text().len() * 2);
        for ch in self.word.text().chars() {
            if ch == ' ' {
                out.push(' ');
            } else if self.revealed.contains(&ch.to_ascii_lowercase()) {
                out.push(ch);
            } else {
                out.push('_');
            }
            out.push(' ');
        }
        out
    }

    /// Number of wrong guesses so far (the gallows stage key)
    #[inline]
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }
}
