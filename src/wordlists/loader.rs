//! Word list loading utilities
//!
//! Turns the embedded string constants into validated [`Word`] values.

use crate::core::Word;

/// Convert an embedded string slice to a Word vector
///
/// Entries that fail validation are skipped.
///
/// # Examples
/// ```
/// use hangman::wordlists::WORDS;
/// use hangman::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["Galaxy", "Museum", "Milky Way"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "Galaxy");
        assert_eq!(words[1].text(), "Museum");
        assert_eq!(words[2].text(), "Milky Way");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["Galaxy", "", "it's", "Museum"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "Galaxy");
        assert_eq!(words[1].text(), "Museum");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn embedded_dictionary_is_fully_valid() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
