//! Word Scramble
//!
//! Find words hidden in the letters of a root word. Each submission must be at
//! least three letters, spelled from the root's letters, new to the session,
//! not the root itself, and a real dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, Session, WordValidator};
//! use word_scramble::dictionary::{LanguageTag, WordSetDictionary};
//!
//! let validator = WordValidator::new(
//!     WordSetDictionary::embedded_french(),
//!     LanguageTag::new("fr"),
//! );
//! let mut session = Session::new("geologie");
//!
//! let accepted = validator.submit("loge", &mut session).unwrap().unwrap();
//! assert_eq!(accepted.points, 5);
//! assert_eq!(validator.submit("loge", &mut session), Err(Rejection::AlreadyUsed));
//! ```

// Core domain types
pub mod core;

// Dictionary lookups
pub mod dictionary;

// Word lists
pub mod wordlists;

// Runtime settings
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
