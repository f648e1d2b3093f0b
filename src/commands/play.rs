//! Interactive hangman session
//!
//! Line-based game loop reading guesses from stdin.

use crate::core::{Game, GuessResult, Outcome, Word};
use crate::gallows::Gallery;
use crate::output::{print_goodbye, print_instructions, print_loss, print_round, print_win};
use rand::Rng;
use std::io::{self, Write};

/// Run one interactive hangman game from start to finish
///
/// Picks a word at random, prints the instructions, then loops on stdin
/// until the game is won, lost, or exited.
///
/// # Errors
///
/// Returns an error if the dictionary is empty or if reading from stdin
/// fails, including the input stream ending mid-game.
pub fn run_play<R: Rng + ?Sized>(
    words: &[Word],
    gallery: &Gallery,
    rng: &mut R,
) -> Result<(), String> {
    let mut game = Game::new(words, rng).ok_or("The dictionary is empty")?;

    print_instructions();
    println!("The word is:");

    loop {
        print_round(&game, gallery);
        let input = read_guess()?;

        match game.guess(&input) {
            GuessResult::Invalid => {
                println!("Invalid input. Please use letters only.");
                continue;
            }
            GuessResult::Incorrect => println!("Wrong guess... Try again!"),
            GuessResult::Correct | GuessResult::Exited => {}
        }

        match game.outcome() {
            Outcome::Ongoing => {}
            Outcome::Won => {
                print_win(&game);
                return Ok(());
            }
            Outcome::Lost => {
                print_loss(&game, gallery);
                return Ok(());
            }
            Outcome::Exited => {
                print_goodbye();
                return Ok(());
            }
        }
    }
}

/// Read one line of input with the game prompt
fn read_guess() -> Result<String, String> {
    print!("> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Err("input ended before the game was over".to_string());
    }

    Ok(input.trim().to_string())
}
