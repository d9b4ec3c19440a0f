//! Core game rules
//!
//! Letter multisets, the submission pipeline, session state and the game
//! lifecycle. Nothing here touches the terminal.

mod game;
mod letters;
mod locale;
mod rejection;
mod session;
mod validator;

pub use game::{Game, GameState};
pub use letters::{LetterPool, is_spellable};
pub use locale::Locale;
pub use rejection::Rejection;
pub use session::{AcceptedWord, Session};
pub use validator::{
    MIN_WORD_LENGTH, ScoreBasis, WordValidator, is_root_word, is_too_short, normalize,
};
