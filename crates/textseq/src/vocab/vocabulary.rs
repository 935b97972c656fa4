//! # Sorted Vocabulary

use std::collections::BTreeSet;

/// A sorted set of unique tokens.
///
/// Ordering is lexicographic over the UTF-8 bytes (`str` ordering).
/// The padding token is not part of the [`Vocabulary`];
/// it is introduced by [`crate::vocab::VocabIndex`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words: BTreeSet<String> = iter.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self {
            words: words.into_iter().collect(),
        }
    }
}

impl Vocabulary {
    /// The sorted words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Is `word` in the vocabulary?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    /// Iterate over the words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
