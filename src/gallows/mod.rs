//! Gallows art for hangman
//!
//! Staged drawings shown as the miss count climbs. Stage 0 is the empty
//! gallows and the final stage completes the figure.

mod embedded;

pub use embedded::{STAGES, STAGES_COUNT};

use crate::core::MAX_MISSES;
use std::fs;
use std::io;
use std::path::Path;

/// A full set of gallows drawings, one per miss count
///
/// Always holds exactly `MAX_MISSES + 1` stages, so every reachable miss
/// count has a drawing.
#[derive(Debug, Clone)]
pub struct Gallery {
    stages: Vec<String>,
}

impl Gallery {
    /// The built-in drawings compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            stages: STAGES.iter().map(|&art| art.to_string()).collect(),
        }
    }

    /// Load a drawing set from a directory of `stage0.txt`..`stage7.txt`
    ///
    /// The whole set is read up front, so a broken directory fails at
    /// startup instead of mid-game.
    ///
    /// # Errors
    ///
    /// Returns an I/O error naming the offending file when a stage is
    /// missing, unreadable, or blank.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref();
        let mut stages = Vec::with_capacity(MAX_MISSES + 1);

        for stage in 0..=MAX_MISSES {
            let path = dir.join(format!("stage{stage}.txt"));
            let art = fs::read_to_string(&path)
                .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;

            if art.trim().is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("{}: drawing is blank", path.display()),
                ));
            }

            stages.push(art);
        }

        Ok(Self { stages })
    }

    /// Drawing for a given miss count
    ///
    /// Counts past the final stage keep returning the final drawing.
    #[must_use]
    pub fn stage(&self, misses: usize) -> &str {
        &self.stages[misses.min(MAX_MISSES)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_has_a_drawing_per_miss_count() {
        assert_eq!(STAGES_COUNT, MAX_MISSES + 1);
        assert_eq!(STAGES.len(), STAGES_COUNT);
    }

    #[test]
    fn stage_zero_is_the_empty_gallows() {
        let gallery = Gallery::embedded();
        assert!(!gallery.stage(0).contains('O'));
    }

    #[test]
    fn final_stage_completes_the_figure() {
        let gallery = Gallery::embedded();
        let last = gallery.stage(MAX_MISSES);

        assert!(last.contains('O'));
        assert!(last.contains('\\'));
    }

    #[test]
    fn every_stage_differs_from_the_previous() {
        let gallery = Gallery::embedded();

        for misses in 1..=MAX_MISSES {
            assert_ne!(
                gallery.stage(misses),
                gallery.stage(misses - 1),
                "stage {misses} repeats the previous drawing"
            );
        }
    }

    #[test]
    fn counts_past_the_limit_reuse_the_final_drawing() {
        let gallery = Gallery::embedded();
        assert_eq!(gallery.stage(MAX_MISSES + 5), gallery.stage(MAX_MISSES));
    }

    #[test]
    fn load_dir_reads_the_bundled_set() {
        let gallery = Gallery::load_dir("data/gallows").unwrap();
        let embedded = Gallery::embedded();

        for misses in 0..=MAX_MISSES {
            assert_eq!(gallery.stage(misses), embedded.stage(misses));
        }
    }

    #[test]
    fn load_dir_missing_directory_fails() {
        assert!(Gallery::load_dir("data/no_such_dir").is_err());
    }
}
