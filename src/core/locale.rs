//! User-facing language for messages and labels

use std::fmt;

/// Language used for rejection messages and interface labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    French,
    English,
}

impl Locale {
    /// Pick a locale from a BCP 47 style language tag
    ///
    /// Tags whose primary subtag is `fr` map to French, anything else to English.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Locale;
    ///
    /// assert_eq!(Locale::from_tag("fr"), Locale::French);
    /// assert_eq!(Locale::from_tag("fr-CA"), Locale::French);
    /// assert_eq!(Locale::from_tag("en_US"), Locale::English);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("fr") {
            Self::French
        } else {
            Self::English
        }
    }

    /// Placeholder shown in the word input
    #[must_use]
    pub const fn input_prompt(self) -> &'static str {
        match self {
            Self::French => "Saisir votre mot",
            Self::English => "Enter your word",
        }
    }

    /// Label for the restart action
    #[must_use]
    pub const fn restart_label(self) -> &'static str {
        match self {
            Self::French => "Rejouer",
            Self::English => "Play again",
        }
    }

    /// Label for the running score
    #[must_use]
    pub const fn score_label(self) -> &'static str {
        match self {
            Self::French | Self::English => "Score",
        }
    }

    /// Label for the list of accepted words
    #[must_use]
    pub const fn words_label(self) -> &'static str {
        match self {
            Self::French => "Mots trouvés",
            Self::English => "Words found",
        }
    }

    #[must_use]
    pub const fn messages_label(self) -> &'static str {
        match self {
            Self::French | Self::English => "Messages",
        }
    }

    #[must_use]
    pub const fn games_label(self) -> &'static str {
        match self {
            Self::French => "Parties",
            Self::English => "Games",
        }
    }

    /// Label for the best score of earlier games
    #[must_use]
    pub const fn best_label(self) -> &'static str {
        match self {
            Self::French => "Meilleur",
            Self::English => "Best",
        }
    }

    #[must_use]
    pub const fn quit_label(self) -> &'static str {
        match self {
            Self::French => "Quitter",
            Self::English => "Quit",
        }
    }

    #[must_use]
    pub const fn commands_label(self) -> &'static str {
        match self {
            Self::French => "Commandes",
            Self::English => "Commands",
        }
    }

    /// Line-mode commands with their descriptions
    #[must_use]
    pub const fn command_help(self) -> [(&'static str, &'static str); 3] {
        match self {
            Self::French => [
                ("/new", "recommencer avec un nouveau mot de départ"),
                ("/words", "afficher les mots trouvés"),
                ("/quit", "quitter la partie"),
            ],
            Self::English => [
                ("/new", "start over with a new root word"),
                ("/words", "list the words found so far"),
                ("/quit", "leave the game"),
            ],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::French => write!(f, "français"),
            Self::English => write!(f, "English"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_is_case_insensitive() {
        assert_eq!(Locale::from_tag("FR"), Locale::French);
        assert_eq!(Locale::from_tag("Fr-be"), Locale::French);
    }

    #[test]
    fn from_tag_defaults_to_english() {
        assert_eq!(Locale::from_tag("de"), Locale::English);
        assert_eq!(Locale::from_tag(""), Locale::English);
        assert_eq!(Locale::from_tag("fra"), Locale::English);
    }

    #[test]
    fn default_is_french() {
        assert_eq!(Locale::default(), Locale::French);
    }

    #[test]
    fn labels_differ_by_locale() {
        assert_ne!(
            Locale::French.input_prompt(),
            Locale::English.input_prompt()
        );
        assert_eq!(Locale::French.restart_label(), "Rejouer");
        assert_eq!(Locale::French.quit_label(), "Quitter");
        assert_eq!(Locale::English.games_label(), "Games");
    }

    #[test]
    fn command_help_lists_same_commands() {
        let french = Locale::French.command_help().map(|(cmd, _)| cmd);
        let english = Locale::English.command_help().map(|(cmd, _)| cmd);
        assert_eq!(french, english);
    }
}
