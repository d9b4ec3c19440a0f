//! State of one play-through

/// A word that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedWord {
    /// Normalized word as recorded in the session
    pub word: String,
    /// Points added to the score for this word
    pub points: usize,
}

/// Root word, accepted words and score of the current game
///
/// Only [`WordValidator::submit`](super::WordValidator::submit) records words,
/// so every entry of [`used_words`](Self::used_words) passed all checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

impl Session {
    /// Start a fresh session around `root_word`
    #[must_use]
    pub fn new(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Whether `word` was already accepted, ignoring case
    #[must_use]
    pub fn has_used(&self, word: &str) -> bool {
        self.used_words
            .iter()
            .any(|used| used.to_lowercase() == word.to_lowercase())
    }

    pub(crate) fn record(&mut self, accepted: &AcceptedWord) {
        self.used_words.insert(0, accepted.word.clone());
        self.score += accepted.points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(word: &str) -> AcceptedWord {
        AcceptedWord {
            word: word.to_string(),
            points: word.chars().count() + 1,
        }
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new("geologie");
        assert_eq!(session.root_word(), "geologie");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn record_keeps_most_recent_first() {
        let mut session = Session::new("geologie");
        session.record(&accepted("loge"));
        session.record(&accepted("gel"));

        assert_eq!(session.used_words(), &["gel", "loge"]);
        assert_eq!(session.score(), 5 + 4);
    }

    #[test]
    fn has_used_ignores_case() {
        let mut session = Session::new("geologie");
        session.record(&accepted("loge"));

        assert!(session.has_used("loge"));
        assert!(session.has_used("LOGE"));
        assert!(!session.has_used("logo"));
    }
}
