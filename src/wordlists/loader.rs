//! Word list loading utilities
//!
//! Provides word list sources backed by files or by embedded constants.

use super::{ROOT_WORDS, SourceUnavailable, WordListSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Split newline-delimited text into trimmed, non-blank words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_lines;
///
/// let words = parse_lines("chat\n\n  loge \r\n");
/// assert_eq!(words, vec!["chat", "loge"]);
/// ```
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Word list read from a file on disk
#[derive(Debug, Clone)]
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordListSource for FileWordList {
    fn load_words(&self) -> Result<Vec<String>, SourceUnavailable> {
        let content =
            fs::read_to_string(&self.path).map_err(|source| SourceUnavailable::Unreadable {
                origin: self.origin(),
                source,
            })?;

        Ok(parse_lines(&content))
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// Word list over a static slice, such as the embedded roots
#[derive(Debug, Clone)]
pub struct StaticWordList<'a> {
    origin: String,
    words: &'a [&'a str],
}

impl<'a> StaticWordList<'a> {
    pub fn new(origin: impl Into<String>, words: &'a [&'a str]) -> Self {
        Self {
            origin: origin.into(),
            words,
        }
    }
}

impl StaticWordList<'static> {
    /// The French root words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new("<embedded French roots>", ROOT_WORDS)
    }
}

impl WordListSource for StaticWordList<'_> {
    fn load_words(&self) -> Result<Vec<String>, SourceUnavailable> {
        Ok(self.words.iter().map(|&w| w.to_string()).collect())
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }
}
