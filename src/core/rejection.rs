//! Reasons a submitted word can be turned down

use super::Locale;
use std::fmt;

/// Why a submission was rejected
///
/// Every variant is recoverable: the session is left untouched and the player
/// simply tries another word. Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The word was already accepted earlier in this session
    AlreadyUsed,
    /// Fewer than [`MIN_WORD_LENGTH`](super::MIN_WORD_LENGTH) characters
    TooShort,
    /// The word is the root word itself
    IsRootWord,
    /// The root word does not hold enough of the letters needed
    NotSpellableFromRoot,
    /// The dictionary does not know the word
    NotARealWord,
}

impl Rejection {
    /// Alert title shown to the player
    #[must_use]
    pub const fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::AlreadyUsed, Locale::French) => "Mot déjà utilisé",
            (Self::AlreadyUsed, Locale::English) => "Word used already",
            (Self::TooShort, Locale::French) => "Mot trop court",
            (Self::TooShort, Locale::English) => "Word too short",
            (Self::IsRootWord, Locale::French) => "Mot de départ",
            (Self::IsRootWord, Locale::English) => "That's the root word",
            (Self::NotSpellableFromRoot, Locale::French) => "Mot impossible",
            (Self::NotSpellableFromRoot, Locale::English) => "Word not possible",
            (Self::NotARealWord, Locale::French) => "Mot inconnu",
            (Self::NotARealWord, Locale::English) => "Word not recognized",
        }
    }

    /// Alert body shown to the player
    #[must_use]
    pub const fn message(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::AlreadyUsed, Locale::French) => "Trouvez-en un autre",
            (Self::AlreadyUsed, Locale::English) => "Be more original",
            (Self::TooShort, Locale::French) => "Au moins 3 caractères",
            (Self::TooShort, Locale::English) => "Use at least 3 letters",
            (Self::IsRootWord, Locale::French) => "Gros malin !",
            (Self::IsRootWord, Locale::English) => "Nice try, smarty!",
            (Self::NotSpellableFromRoot, Locale::French) => {
                "Ce mot ne s'écrit pas avec les lettres du mot de départ"
            }
            (Self::NotSpellableFromRoot, Locale::English) => {
                "You can't spell that word from the root word's letters"
            }
            (Self::NotARealWord, Locale::French) => "Ce n'est pas un vrai mot",
            (Self::NotARealWord, Locale::English) => "That's not a real word",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyUsed => write!(f, "word already used in this session"),
            Self::TooShort => write!(f, "word is too short"),
            Self::IsRootWord => write!(f, "word is the root word"),
            Self::NotSpellableFromRoot => write!(f, "word cannot be spelled from the root word"),
            Self::NotARealWord => write!(f, "word is not in the dictionary"),
        }
    }
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [Rejection; 5] = [
        Rejection::AlreadyUsed,
        Rejection::TooShort,
        Rejection::IsRootWord,
        Rejection::NotSpellableFromRoot,
        Rejection::NotARealWord,
    ];

    #[test]
    fn every_kind_has_distinct_titles() {
        for locale in [Locale::French, Locale::English] {
            let titles: HashSet<_> = ALL.iter().map(|r| r.title(locale)).collect();
            assert_eq!(titles.len(), ALL.len(), "duplicate title in {locale}");
        }
    }

    #[test]
    fn messages_are_non_empty() {
        for rejection in ALL {
            for locale in [Locale::French, Locale::English] {
                assert!(!rejection.title(locale).is_empty());
                assert!(!rejection.message(locale).is_empty());
            }
        }
    }

    #[test]
    fn french_texts() {
        assert_eq!(Rejection::IsRootWord.title(Locale::French), "Mot de départ");
        assert_eq!(Rejection::IsRootWord.message(Locale::French), "Gros malin !");
        assert_eq!(Rejection::TooShort.title(Locale::French), "Mot trop court");
        assert_eq!(Rejection::NotARealWord.title(Locale::French), "Mot inconnu");
        assert_eq!(
            Rejection::NotARealWord.message(Locale::French),
            "Ce n'est pas un vrai mot"
        );
    }

    #[test]
    fn display_is_locale_independent() {
        assert_eq!(Rejection::TooShort.to_string(), "word is too short");
        assert_eq!(
            Rejection::NotARealWord.to_string(),
            "word is not in the dictionary"
        );
    }
}
