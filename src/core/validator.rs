//! Submission pipeline
//!
//! A raw submission is normalized, then run through five checks in a fixed
//! order. The first failing check decides the rejection; later checks are
//! skipped. Only a fully valid word touches the session.

use super::letters::is_spellable;
use super::{AcceptedWord, Rejection, Session};
use crate::dictionary::{DictionaryOracle, LanguageTag};
use tracing::{debug, info};

/// Minimum number of characters in an accepted word
pub const MIN_WORD_LENGTH: usize = 3;

/// Which length of the submission counts towards the score
///
/// A word earns `length + 1` points. The word recorded in the session is always
/// the normalized form; this only decides what `length` measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ScoreBasis {
    /// Characters of the input with surrounding whitespace removed
    ///
    /// Lengths count Unicode scalar values, not grapheme clusters: a decomposed
    /// `e` + U+0301 counts as two.
    #[default]
    Trimmed,
    /// Characters of the input exactly as typed, whitespace included
    Raw,
}

impl ScoreBasis {
    /// Points earned by an accepted submission typed as `raw`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::ScoreBasis;
    ///
    /// assert_eq!(ScoreBasis::Trimmed.points_for(" loge "), 5);
    /// assert_eq!(ScoreBasis::Raw.points_for(" loge "), 7);
    /// ```
    #[must_use]
    pub fn points_for(self, raw: &str) -> usize {
        let counted = match self {
            Self::Trimmed => raw.trim(),
            Self::Raw => raw,
        };
        counted.chars().count() + 1
    }
}

/// Lowercase and trim a raw submission
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `word` is shorter than [`MIN_WORD_LENGTH`]
///
/// Counts Unicode scalar values, so combining marks count as characters of
/// their own.
#[inline]
#[must_use]
pub fn is_too_short(word: &str) -> bool {
    word.chars().count() < MIN_WORD_LENGTH
}

/// Whether `word` is the root word, ignoring case
#[must_use]
pub fn is_root_word(word: &str, root: &str) -> bool {
    word.to_lowercase() == root.to_lowercase()
}

/// Validates submissions against a session and records the valid ones
#[derive(Debug, Clone)]
pub struct WordValidator<D> {
    dictionary: D,
    language: LanguageTag,
    score_basis: ScoreBasis,
}

impl<D: DictionaryOracle> WordValidator<D> {
    #[must_use]
    pub fn new(dictionary: D, language: LanguageTag) -> Self {
        Self {
            dictionary,
            language,
            score_basis: ScoreBasis::default(),
        }
    }

    #[must_use]
    pub fn with_score_basis(mut self, score_basis: ScoreBasis) -> Self {
        self.score_basis = score_basis;
        self
    }

    #[must_use]
    pub const fn language(&self) -> &LanguageTag {
        &self.language
    }

    #[must_use]
    pub const fn score_basis(&self) -> ScoreBasis {
        self.score_basis
    }

    /// Run every check on `word` without touching the session
    ///
    /// `word` must already be normalized.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the first failing check.
    pub fn check(&self, word: &str, session: &Session) -> Result<(), Rejection> {
        if session.has_used(word) {
            return Err(Rejection::AlreadyUsed);
        }

        if is_too_short(word) {
            return Err(Rejection::TooShort);
        }

        let root = session.root_word().to_lowercase();
        if is_root_word(word, &root) {
            return Err(Rejection::IsRootWord);
        }

        if !is_spellable(word, &root) {
            return Err(Rejection::NotSpellableFromRoot);
        }

        if !self.dictionary.is_valid_word(word, &self.language) {
            return Err(Rejection::NotARealWord);
        }

        Ok(())
    }

    /// Submit a raw input for the given session
    ///
    /// Blank input is ignored and yields `Ok(None)`. A valid word is inserted at
    /// the front of the session's used words and its points added to the score.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the first failing check; the session is not
    /// modified in that case.
    pub fn submit(
        &self,
        raw: &str,
        session: &mut Session,
    ) -> Result<Option<AcceptedWord>, Rejection> {
        let word = normalize(raw);
        if word.is_empty() {
            return Ok(None);
        }

        if let Err(rejection) = self.check(&word, session) {
            debug!(%word, root = session.root_word(), ?rejection, "submission rejected");
            return Err(rejection);
        }

        let accepted = AcceptedWord {
            word,
            points: self.score_basis.points_for(raw),
        };
        session.record(&accepted);
        info!(
            word = %accepted.word,
            points = accepted.points,
            score = session.score(),
            "word accepted"
        );

        Ok(Some(accepted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSetDictionary;

    fn validator() -> WordValidator<WordSetDictionary> {
        let dictionary = WordSetDictionary::from_words(
            LanguageTag::new("fr"),
            ["loge", "logo", "gel", "lie", "geologie", "chat", "tac", "oxo", "elle"],
        );
        WordValidator::new(dictionary, LanguageTag::new("fr"))
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("  LoGe \n"), "loge");
        assert_eq!(normalize("\t "), "");
    }

    #[test]
    fn accepts_valid_word() {
        let validator = validator();
        let mut session = Session::new("geologie");

        let accepted = validator.submit("loge", &mut session).unwrap().unwrap();

        assert_eq!(accepted.word, "loge");
        assert_eq!(accepted.points, 5);
        assert_eq!(session.score(), 5);
        assert_eq!(session.used_words(), &["loge"]);
    }

    #[test]
    fn duplicate_is_rejected() {
        let validator = validator();
        let mut session = Session::new("geologie");

        validator.submit("loge", &mut session).unwrap();
        assert_eq!(
            validator.submit("loge", &mut session),
            Err(Rejection::AlreadyUsed)
        );
        assert_eq!(
            validator.submit("  LOGE ", &mut session),
            Err(Rejection::AlreadyUsed)
        );
        assert_eq!(session.score(), 5);
        assert_eq!(session.used_words().len(), 1);
    }

    #[test]
    fn short_word_is_rejected() {
        let validator = validator();
        let mut session = Session::new("chat");

        assert_eq!(
            validator.submit("ch", &mut session),
            Err(Rejection::TooShort)
        );
    }

    #[test]
    fn length_check_precedes_spellability() {
        let validator = validator();
        let mut session = Session::new("geologie");

        // "ox" is not spellable either, but it is caught as too short first
        assert_eq!(
            validator.submit("ox", &mut session),
            Err(Rejection::TooShort)
        );
        assert_eq!(
            validator.submit("oxo", &mut session),
            Err(Rejection::NotSpellableFromRoot)
        );
    }

    #[test]
    fn root_word_is_rejected_case_insensitively() {
        let validator = validator();
        let mut session = Session::new("chat");

        assert_eq!(
            validator.submit("Chat", &mut session),
            Err(Rejection::IsRootWord)
        );
        assert_eq!(
            validator.submit("CHAT ", &mut session),
            Err(Rejection::IsRootWord)
        );
    }

    #[test]
    fn uppercase_root_is_compared_lowercased() {
        let validator = validator();
        let mut session = Session::new("GEOLOGIE");

        assert!(validator.submit("loge", &mut session).unwrap().is_some());
        assert_eq!(
            validator.submit("geologie", &mut session),
            Err(Rejection::IsRootWord)
        );
    }

    #[test]
    fn multiplicity_is_enforced() {
        let validator = validator();
        let mut session = Session::new("geologie");

        assert_eq!(
            validator.submit("elle", &mut session),
            Err(Rejection::NotSpellableFromRoot)
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        let validator = validator();
        let mut session = Session::new("geologie");

        // spellable from the root, but not in the dictionary
        assert_eq!(
            validator.submit("oie", &mut session),
            Err(Rejection::NotARealWord)
        );
    }

    #[test]
    fn wrong_language_rejects_everything() {
        let dictionary = WordSetDictionary::from_words(LanguageTag::new("fr"), ["loge"]);
        let validator = WordValidator::new(dictionary, LanguageTag::new("en"));
        let mut session = Session::new("geologie");

        assert_eq!(
            validator.submit("loge", &mut session),
            Err(Rejection::NotARealWord)
        );
    }

    #[test]
    fn blank_input_is_ignored() {
        let validator = validator();
        let mut session = Session::new("geologie");

        assert_eq!(validator.submit("", &mut session), Ok(None));
        assert_eq!(validator.submit("   \n", &mut session), Ok(None));
        assert_eq!(session, Session::new("geologie"));
    }

    #[test]
    fn rejection_is_idempotent() {
        let validator = validator();
        let mut session = Session::new("geologie");
        validator.submit("loge", &mut session).unwrap();
        let snapshot = session.clone();

        for input in ["elle", "oie", "ox", "geologie", "loge"] {
            let first = validator.submit(input, &mut session);
            let second = validator.submit(input, &mut session);
            assert!(first.is_err());
            assert_eq!(first, second);
            assert_eq!(session, snapshot);
        }
    }

    #[test]
    fn score_sums_trimmed_lengths_plus_one() {
        let validator = validator();
        let mut session = Session::new("geologie");

        for input in ["loge", " gel ", "LIE", "logo"] {
            validator.submit(input, &mut session).unwrap();
        }

        assert_eq!(session.score(), 5 + 4 + 4 + 5);
        assert_eq!(session.used_words(), &["logo", "lie", "gel", "loge"]);
    }

    #[test]
    fn raw_score_basis_counts_whitespace() {
        let validator = validator().with_score_basis(ScoreBasis::Raw);
        let mut session = Session::new("geologie");

        let accepted = validator.submit(" gel  ", &mut session).unwrap().unwrap();

        assert_eq!(accepted.word, "gel");
        assert_eq!(accepted.points, 7);
        assert_eq!(session.score(), 7);
    }

    #[test]
    fn length_counts_scalar_values() {
        assert!(is_too_short("é"));
        assert!(!is_too_short("e\u{301}e"));
        assert_eq!(ScoreBasis::Trimmed.points_for("e\u{301}té"), 5);
    }

    #[test]
    fn accepted_words_satisfy_every_check() {
        let validator = validator();
        let mut session = Session::new("geologie");

        for input in ["loge", "logo", "gel", "lie", "elle", "oxo", "geologie", "loge"] {
            let _ = validator.submit(input, &mut session);
        }

        for word in session.used_words() {
            assert!(!is_too_short(word));
            assert!(!is_root_word(word, session.root_word()));
            assert!(is_spellable(word, session.root_word()));
            assert_eq!(session.used_words().iter().filter(|w| *w == word).count(), 1);
        }
        assert_eq!(session.used_words().len(), 4);
    }
}
