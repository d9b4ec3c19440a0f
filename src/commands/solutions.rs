//! Solution finder
//!
//! Lists every dictionary word that the validator would accept for a fresh
//! session on a given root word.

use crate::core::{LetterPool, is_root_word, is_too_short};
use crate::dictionary::WordSetDictionary;
use rayon::prelude::*;

/// All playable words for one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionsResult {
    pub root: String,
    /// Longest words first, then alphabetical
    pub words: Vec<String>,
    /// Score earned by playing every word
    pub max_score: usize,
}

/// Find the words of `lexicon` playable from `root`
///
/// A word is playable when it is long enough, is not the root itself and can be
/// spelled from the root's letters. `lexicon` entries are expected lowercase.
#[must_use]
pub fn find_solutions(root: &str, lexicon: &[&str]) -> Vec<String> {
    let root = root.to_lowercase();
    let pool = LetterPool::from_word(&root);

    let mut words: Vec<String> = lexicon
        .par_iter()
        .filter(|word| !is_too_short(word) && !is_root_word(word, &root) && pool.can_spell(word))
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words.dedup();
    words
}

/// Score earned by playing every word of `words`
#[must_use]
pub fn max_score(words: &[String]) -> usize {
    words.iter().map(|w| w.chars().count() + 1).sum()
}

/// Solve a root against the full dictionary
#[must_use]
pub fn solve_root(root: &str, dictionary: &WordSetDictionary) -> SolutionsResult {
    let lexicon: Vec<&str> = dictionary.words().collect();
    let words = find_solutions(root, &lexicon);

    SolutionsResult {
        root: root.to_lowercase(),
        max_score: max_score(&words),
        words,
    }
}
