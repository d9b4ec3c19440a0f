//! Runtime settings resolved from the command line

use crate::core::{Locale, ScoreBasis, WordValidator};
use crate::dictionary::{LanguageTag, WordSetDictionary};
use crate::wordlists::{DICTIONARY_WORDS, FileWordList, StaticWordList, WordListSource};
use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Everything needed to set up a game
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub language: LanguageTag,
    pub wordlist: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
    pub score_basis: ScoreBasis,
    pub seed: Option<u64>,
}

impl Settings {
    /// Locale for messages, derived from the language tag
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::from_tag(self.language.as_str())
    }

    /// Source of root words: the given file, or the embedded French list
    #[must_use]
    pub fn word_list_source(&self) -> Box<dyn WordListSource> {
        match &self.wordlist {
            Some(path) => Box::new(FileWordList::new(path)),
            None => Box::new(StaticWordList::embedded()),
        }
    }

    /// Load the dictionary for the configured language
    ///
    /// # Errors
    ///
    /// Fails if the dictionary file cannot be read or is empty, or if a
    /// language other than French is requested without a dictionary file.
    /// Any French variant (`fr`, `fr-CA`, ...) uses the embedded dictionary.
    pub fn load_dictionary(&self) -> Result<WordSetDictionary> {
        match &self.dictionary {
            Some(path) => Ok(WordSetDictionary::load(
                self.language.clone(),
                &FileWordList::new(path),
            )?),
            None if self.locale() == Locale::French => Ok(WordSetDictionary::from_words(
                self.language.clone(),
                DICTIONARY_WORDS,
            )),
            None => bail!(
                "no embedded dictionary for language '{}'; pass --dictionary <PATH>",
                self.language
            ),
        }
    }

    /// Build the validator for these settings
    ///
    /// # Errors
    ///
    /// See [`Settings::load_dictionary`].
    pub fn validator(&self) -> Result<WordValidator<WordSetDictionary>> {
        Ok(WordValidator::new(self.load_dictionary()?, self.language.clone())
            .with_score_basis(self.score_basis))
    }

    /// Random source for root selection, seeded when `--seed` was given
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
