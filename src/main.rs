//! Hangman - CLI
//!
//! Terminal hangman game with phrase support and staged gallows drawings.

use anyhow::Result;
use clap::Parser;
use hangman::{
    commands::run_play,
    gallows::Gallery,
    wordlists::{WORDS, loader::words_from_slice},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with phrase support and staged gallows art",
    version,
    author
)]
struct Cli {
    /// Directory with custom gallows drawings (stage0.txt..stage7.txt)
    #[arg(short, long, value_name = "DIR")]
    art: Option<PathBuf>,
}

/// Load the gallows drawings based on the -a flag
///
/// Uses the embedded set unless a directory is given.
fn load_gallery(art_dir: Option<&Path>) -> Result<Gallery> {
    match art_dir {
        Some(dir) => Ok(Gallery::load_dir(dir)?),
        None => Ok(Gallery::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let gallery = load_gallery(cli.art.as_deref())?;
    let words = words_from_slice(WORDS);

    run_play(&words, &gallery, &mut rand::rng()).map_err(|e| anyhow::anyhow!(e))
}
