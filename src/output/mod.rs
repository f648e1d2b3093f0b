//! Terminal output formatting
//!
//! Display utilities for the game loop and end-of-game banners.

pub mod display;

pub use display::{print_goodbye, print_instructions, print_loss, print_round, print_win};
