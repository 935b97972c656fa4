//! # Vocabulary Builder

use std::collections::BTreeMap;

use crate::{
    errors::TSResult,
    tokenize::Tokenizer,
    types::TokenizedSentence,
    vocab::Vocabulary,
};

/// The result of [`VocabularyBuilder::finish`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltVocabulary {
    /// The corpus-wide vocabulary.
    pub vocabulary: Vocabulary,

    /// Every corpus line, tokenized, in corpus order.
    pub tokenized: Vec<TokenizedSentence>,
}

/// Accumulates a [`Vocabulary`] over every line of a corpus.
///
/// The vocabulary is the union of the tokens of *all* lines seen;
/// the tokenized lines are retained in the order they were added.
pub struct VocabularyBuilder<'t, K: Tokenizer + ?Sized> {
    tokenizer: &'t K,

    /// Occurrence counts, keyed (and therefore sorted) by token.
    token_counts: BTreeMap<String, usize>,

    tokenized: Vec<TokenizedSentence>,
}

impl<'t, K: Tokenizer + ?Sized> VocabularyBuilder<'t, K> {
    /// Create a new, empty builder.
    pub fn new(tokenizer: &'t K) -> Self {
        Self {
            tokenizer,
            token_counts: BTreeMap::new(),
            tokenized: Vec::new(),
        }
    }

    /// Tokenize `corpus` and build its vocabulary in one call.
    ///
    /// ## Arguments
    /// * `tokenizer` - The tokenizer to apply to each line.
    /// * `corpus` - The corpus lines.
    pub fn build<I>(
        tokenizer: &'t K,
        corpus: I,
    ) -> TSResult<BuiltVocabulary>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut builder = Self::new(tokenizer);
        builder.update_from_samples(corpus)?;
        Ok(builder.finish())
    }

    /// Tokenize one line and fold its tokens into the vocabulary.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) -> TSResult<()> {
        let tokens = self.tokenizer.try_tokenize(text.as_ref())?;
        for token in &tokens {
            match self.token_counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    self.token_counts.insert(token.clone(), 1);
                }
            }
        }
        self.tokenized.push(tokens);
        Ok(())
    }

    /// Update from a sample iterator; one sample per line.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) -> TSResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample)?;
        }
        Ok(())
    }

    /// The number of lines seen so far.
    pub fn num_lines(&self) -> usize {
        self.tokenized.len()
    }

    /// The number of times `token` has been seen.
    pub fn token_count(
        &self,
        token: &str,
    ) -> usize {
        self.token_counts.get(token).copied().unwrap_or(0)
    }

    /// Release the vocabulary and the tokenized lines.
    pub fn finish(self) -> BuiltVocabulary {
        log::debug!(
            "vocabulary: {} unique tokens, {} total, over {} lines",
            self.token_counts.len(),
            self.token_counts.values().sum::<usize>(),
            self.tokenized.len()
        );

        BuiltVocabulary {
            vocabulary: self.token_counts.into_keys().collect(),
            tokenized: self.tokenized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::{RegexTokenizer, WhitespaceTokenizer};

    #[test]
    fn test_build() {
        let corpus = vec!["the cat sat", "the dog ran fast"];

        let built = VocabularyBuilder::build(&WhitespaceTokenizer, &corpus).unwrap();

        assert_eq!(
            built.vocabulary.words(),
            &["cat", "dog", "fast", "ran", "sat", "the"]
        );
        assert_eq!(
            built.tokenized,
            vec![
                vec!["the", "cat", "sat"],
                vec!["the", "dog", "ran", "fast"]
            ]
        );
        // The input is untouched.
        assert_eq!(corpus, vec!["the cat sat", "the dog ran fast"]);
    }

    #[test]
    fn test_union_of_all_lines() {
        let corpus = ["alpha beta", "gamma", "delta"];

        let built = VocabularyBuilder::build(&WhitespaceTokenizer, corpus).unwrap();

        for word in ["alpha", "beta", "gamma", "delta"] {
            assert!(built.vocabulary.contains(word), "missing {word:?}");
        }
        assert_eq!(built.vocabulary.len(), 4);
    }

    #[test]
    fn test_incremental_counts() {
        let tokenizer = RegexTokenizer::default();
        let mut builder = VocabularyBuilder::new(&tokenizer);

        builder.update_from_text("Hello world").unwrap();
        builder
            .update_from_samples(["Foo world bar world"])
            .unwrap();

        assert_eq!(builder.num_lines(), 2);
        assert_eq!(builder.token_count("world"), 3);
        assert_eq!(builder.token_count("Hello"), 1);
        assert_eq!(builder.token_count("nope"), 0);

        let built = builder.finish();
        assert_eq!(
            built.vocabulary.words(),
            &["Foo", "Hello", "bar", "world"]
        );
    }

    #[test]
    fn test_empty_lines() {
        let built = VocabularyBuilder::build(&WhitespaceTokenizer, ["", "a"]).unwrap();
        assert_eq!(built.tokenized, vec![vec![], vec!["a".to_string()]]);
        assert_eq!(built.vocabulary.words(), &["a"]);
    }
}
