//! Dictionary lookups
//!
//! The validator only needs to ask "is this a word in language L?". That
//! question is answered by a [`DictionaryOracle`], so the word source can be
//! swapped per language without touching validation.

mod word_set;

pub use word_set::WordSetDictionary;

use std::fmt;

/// Language tag such as `fr` or `en-GB`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a tag; surrounding whitespace is dropped
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_string())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether two tags name the same language, ignoring case and the
    /// `-`/`_` separator spelling
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::LanguageTag;
    ///
    /// assert!(LanguageTag::new("fr-CA").matches(&LanguageTag::new("FR_ca")));
    /// assert!(!LanguageTag::new("fr").matches(&LanguageTag::new("fr-CA")));
    /// ```
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        let canonical = |tag: &str| tag.replace('_', "-").to_ascii_lowercase();
        canonical(&self.0) == canonical(&other.0)
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::new("fr")
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LanguageTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = Self::new(s);
        if tag.0.is_empty() {
            return Err("language tag must not be empty".to_string());
        }
        if !tag.0.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(format!("invalid language tag '{s}'"));
        }
        Ok(tag)
    }
}

/// Answers whether a string is a real word in a given language
pub trait DictionaryOracle {
    fn is_valid_word(&self, word: &str, language: &LanguageTag) -> bool;
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn is_valid_word(&self, word: &str, language: &LanguageTag) -> bool {
        (**self).is_valid_word(word, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_trimmed() {
        assert_eq!(LanguageTag::new(" fr ").as_str(), "fr");
    }

    #[test]
    fn tag_parses() {
        assert_eq!("en-GB".parse::<LanguageTag>().unwrap().as_str(), "en-GB");
        assert!("".parse::<LanguageTag>().is_err());
        assert!("fr fr".parse::<LanguageTag>().is_err());
    }

    #[test]
    fn default_tag_is_french() {
        assert_eq!(LanguageTag::default().as_str(), "fr");
    }

    fn knows<D: DictionaryOracle>(oracle: D, word: &str) -> bool {
        oracle.is_valid_word(word, &LanguageTag::new("fr"))
    }

    #[test]
    fn oracle_through_reference() {
        let dictionary = WordSetDictionary::from_words(LanguageTag::new("fr"), ["loge"]);
        let by_ref: &dyn DictionaryOracle = &dictionary;

        assert!(by_ref.is_valid_word("loge", &LanguageTag::new("fr")));
        assert!(knows(&dictionary, "loge"));
        assert!(!knows(by_ref, "gel"));
    }
}
