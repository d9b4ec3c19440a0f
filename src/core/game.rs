//! Game lifecycle
//!
//! A game owns the pool of root words and the current session. Starting (or
//! restarting) a game draws a new root uniformly at random and resets the
//! score and used words.

use super::{AcceptedWord, Rejection, Session, WordValidator};
use crate::dictionary::DictionaryOracle;
use crate::wordlists::{SourceUnavailable, WordListSource};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{info, warn};

/// Where the game is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Active(Session),
}

/// A word scramble game: root word pool, validator and current session
#[derive(Debug)]
pub struct Game<D> {
    root_words: Vec<String>,
    validator: WordValidator<D>,
    state: GameState,
}

impl<D: DictionaryOracle> Game<D> {
    /// Load the root word pool from `source`
    ///
    /// The game starts in [`GameState::NotStarted`]; call [`Game::start_game`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceUnavailable`] if the source cannot be read or holds no
    /// words. The game cannot run without a root word, so callers should treat
    /// this as fatal.
    pub fn new(
        source: &impl WordListSource,
        validator: WordValidator<D>,
    ) -> Result<Self, SourceUnavailable> {
        let root_words: Vec<String> = source
            .load_words()?
            .into_iter()
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if root_words.is_empty() {
            return Err(SourceUnavailable::Empty {
                origin: source.origin(),
            });
        }

        info!(
            origin = %source.origin(),
            roots = root_words.len(),
            "root word pool loaded"
        );

        Ok(Self {
            root_words,
            validator,
            state: GameState::NotStarted,
        })
    }

    /// Start a new game with a root drawn from the thread RNG
    pub fn start_game(&mut self) -> &Session {
        self.start_game_with_rng(&mut rand::rng())
    }

    /// Start a new game with a root drawn from `rng`
    ///
    /// Works from any state: an active game is discarded along with its score.
    pub fn start_game_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Session {
        // The pool is checked non-empty in `new`
        let root = self
            .root_words
            .choose(rng)
            .cloned()
            .unwrap_or_default();

        info!(root = %root, "new game started");
        self.state = GameState::Active(Session::new(root));

        match &self.state {
            GameState::Active(session) => session,
            GameState::NotStarted => unreachable!("state was just set to active"),
        }
    }

    /// Submit a raw input to the current session
    ///
    /// Input submitted before the first [`Game::start_game`] is ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reported by the validator.
    pub fn submit(&mut self, raw: &str) -> Result<Option<AcceptedWord>, Rejection> {
        match &mut self.state {
            GameState::Active(session) => self.validator.submit(raw, session),
            GameState::NotStarted => {
                warn!("submission ignored: no game in progress");
                Ok(None)
            }
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The current session, if a game is in progress
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match &self.state {
            GameState::Active(session) => Some(session),
            GameState::NotStarted => None,
        }
    }

    /// All root words a game can start from
    #[must_use]
    pub fn root_words(&self) -> &[String] {
        &self.root_words
    }

    #[must_use]
    pub const fn validator(&self) -> &WordValidator<D> {
        &self.validator
    }
}
