//! Word lists for the game
//!
//! Root words come from a [`WordListSource`]: either the French list compiled
//! into the binary or a newline-delimited file on disk. The French dictionary
//! is embedded the same way.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use loader::{FileWordList, StaticWordList};

use std::fmt;
use std::io;

/// Supplies the candidate root words, read in full once per game load
pub trait WordListSource {
    /// Read every word of the source
    ///
    /// # Errors
    ///
    /// Returns [`SourceUnavailable`] when the underlying data cannot be read.
    fn load_words(&self) -> Result<Vec<String>, SourceUnavailable>;

    /// Human-readable description of where the words come from
    fn origin(&self) -> String;
}

impl<T: WordListSource + ?Sized> WordListSource for Box<T> {
    fn load_words(&self) -> Result<Vec<String>, SourceUnavailable> {
        (**self).load_words()
    }

    fn origin(&self) -> String {
        (**self).origin()
    }
}

/// The word list could not supply any root word
#[derive(Debug)]
pub enum SourceUnavailable {
    /// Reading the source failed
    Unreadable { origin: String, source: io::Error },
    /// The source holds no words
    Empty { origin: String },
}

impl fmt::Display for SourceUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { origin, source } => {
                write!(f, "word list {origin} could not be read: {source}")
            }
            Self::Empty { origin } => write!(f, "word list {origin} contains no words"),
        }
    }
}

impl std::error::Error for SourceUnavailable {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn roots_count_matches_const() {
        assert_eq!(ROOT_WORDS.len(), ROOT_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY_WORDS.len(), DICTIONARY_WORDS_COUNT);
    }

    #[test]
    fn roots_are_lowercase_words() {
        for &word in ROOT_WORDS {
            assert!(word.chars().count() >= 3, "Root '{word}' is too short");
            assert!(
                word.chars().all(char::is_lowercase),
                "Root '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn roots_are_unique() {
        let unique: HashSet<_> = ROOT_WORDS.iter().collect();
        assert_eq!(unique.len(), ROOT_WORDS.len());
    }

    #[test]
    fn roots_subset_of_dictionary() {
        let dictionary: HashSet<_> = DICTIONARY_WORDS.iter().collect();

        for root in ROOT_WORDS {
            assert!(dictionary.contains(root), "Root '{root}' not in dictionary");
        }
    }

    #[test]
    fn unavailable_display_names_origin() {
        let err = SourceUnavailable::Empty {
            origin: "roots.txt".to_string(),
        };
        assert_eq!(err.to_string(), "word list roots.txt contains no words");
    }

    #[test]
    fn unreadable_exposes_io_source() {
        use std::error::Error;

        let err = SourceUnavailable::Unreadable {
            origin: "missing.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("word list missing.txt could not be read"));
    }
}
