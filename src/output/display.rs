//! Display functions for the game loop

use crate::core::Game;
use crate::gallows::Gallery;
use colored::Colorize;

/// Print the welcome banner and the rules
pub fn print_instructions() {
    println!(
        "{}",
        "Welcome to the game Hangman. The instructions are:"
            .red()
            .bold()
    );
    println!(
        "{}",
        r#"
1. The player will select a letter from the alphabet. (Any letter case works)
2. If the word contains that letter, all other letters equal to it are going to be revealed.
3. If the word does not contain this letter, a portion of the hangman is going to be added.
4. The game continues until:
a) the word/phrase is guessed and all letters are revealed - WINNER or,
b) all the parts of the hangman are displayed - LOSER
5. You can exit the program at all times by typing "Exit"/"exit"
"#
        .yellow()
    );
}

/// Print the masked word and the current gallows drawing
pub fn print_round(game: &Game, gallery: &Gallery) {
    println!("{}", game.progress());
    println!();
    println!("{}", gallery.stage(game.misses()));
}

/// Print the victory banner
pub fn print_win(game: &Game) {
    println!("{}", "Game Over".green().bold());
    println!("The word was {}!", game.word());
    println!("{}", "You won!".green().bold());
}

/// Print the defeat banner with the completed figure
pub fn print_loss(game: &Game, gallery: &Gallery) {
    println!("{}", gallery.stage(game.misses()));
    println!("{}", "Game Over".red().bold());
    println!("The word was {}...", game.word());
    println!("{}", "You lost!".red().bold());
}

/// Print the exit farewell
pub fn print_goodbye() {
    println!("Goodbye...");
}
