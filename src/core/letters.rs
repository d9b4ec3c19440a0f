//! Letter multiset for spellability checks
//!
//! A root word provides a bag of letters; a candidate is spellable when every one
//! of its letters can be taken from that bag, each occurrence at most once.

use rustc_hash::FxHashMap;

/// Multiset of the letters available in a word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build the pool from every character of `word`
    ///
    /// The word is used as given; callers normalize case beforehand.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("geologie");
    /// assert_eq!(pool.count('g'), 2);
    /// assert_eq!(pool.count('x'), 0);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of remaining occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Consume one occurrence of `letter`
    ///
    /// Returns `false` (leaving the pool untouched) when the letter is exhausted.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool without modifying it
    ///
    /// Greedy consumption on a scratch copy: occurrences of the same letter are
    /// interchangeable, so the first missing letter settles the answer.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut scratch = self.clone();
        word.chars().all(|ch| scratch.take(ch))
    }
}

/// Check whether `word` can be spelled from the letters of `root`
///
/// # Examples
/// ```
/// use word_scramble::core::is_spellable;
///
/// assert!(is_spellable("loge", "geologie"));
/// assert!(!is_spellable("elle", "geologie")); // only one 'l'
/// ```
#[must_use]
pub fn is_spellable(word: &str, root: &str) -> bool {
    LetterPool::from_word(root).can_spell(word)
}
