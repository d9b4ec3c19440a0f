//! Hash set backed dictionary

use super::{DictionaryOracle, LanguageTag};
use crate::wordlists::{DICTIONARY_WORDS, SourceUnavailable, WordListSource};
use rustc_hash::FxHashSet;

/// Dictionary for a single language held in memory
///
/// Lookups are exact matches on the lowercased word; there is no tolerance
/// for misspellings.
#[derive(Debug, Clone)]
pub struct WordSetDictionary {
    language: LanguageTag,
    words: FxHashSet<String>,
}

impl WordSetDictionary {
    /// Build a dictionary from an iterator of words
    ///
    /// Words are trimmed and lowercased; blank entries are skipped.
    pub fn from_words<I, S>(language: LanguageTag, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { language, words }
    }

    /// The French dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{DictionaryOracle, LanguageTag, WordSetDictionary};
    ///
    /// let dictionary = WordSetDictionary::embedded_french();
    /// assert!(dictionary.is_valid_word("loge", &LanguageTag::new("fr")));
    /// ```
    #[must_use]
    pub fn embedded_french() -> Self {
        Self::from_words(LanguageTag::new("fr"), DICTIONARY_WORDS)
    }

    /// Load the dictionary for `language` from any word list source
    ///
    /// # Errors
    ///
    /// Propagates [`SourceUnavailable`] from the source, and reports an empty
    /// source as [`SourceUnavailable::Empty`].
    pub fn load(
        language: LanguageTag,
        source: &impl WordListSource,
    ) -> Result<Self, SourceUnavailable> {
        let dictionary = Self::from_words(language, source.load_words()?);
        if dictionary.is_empty() {
            return Err(SourceUnavailable::Empty {
                origin: source.origin(),
            });
        }
        Ok(dictionary)
    }

    #[must_use]
    pub const fn language(&self) -> &LanguageTag {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

impl DictionaryOracle for WordSetDictionary {
    fn is_valid_word(&self, word: &str, language: &LanguageTag) -> bool {
        self.language.matches(language) && self.contains(word)
    }
}
