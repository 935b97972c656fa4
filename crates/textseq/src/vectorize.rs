//! # Vectorizer
//!
//! Rewrites tokenized sentences as id sequences over a [`VocabIndex`].

use crate::{
    errors::{TSResult, TextSeqError},
    types::{IdSequence, IdType, TokenizedSentence},
    vocab::VocabIndex,
};

/// Maps tokenized sentences to [`IdSequence`]s.
///
/// Unknown tokens are errors; no default id is ever substituted.
#[derive(Debug, Clone, Copy)]
pub struct Vectorizer<'a, T: IdType> {
    index: &'a VocabIndex<T>,
}

impl<'a, T: IdType> Vectorizer<'a, T> {
    /// Create a new vectorizer over a finalized index.
    pub fn new(index: &'a VocabIndex<T>) -> Self {
        Self { index }
    }

    /// The index ids are drawn from.
    pub fn index(&self) -> &'a VocabIndex<T> {
        self.index
    }

    /// Vectorize one sentence.
    ///
    /// ## Arguments
    /// * `sentence_idx` - The sentence's position in its batch; used in errors.
    /// * `sentence` - The tokens.
    pub fn try_vectorize_sentence<S: AsRef<str>>(
        &self,
        sentence_idx: usize,
        sentence: &[S],
    ) -> TSResult<IdSequence<T>> {
        sentence
            .iter()
            .enumerate()
            .map(|(position, token)| {
                let token = token.as_ref();
                self.index
                    .lookup_id(token)
                    .ok_or_else(|| TextSeqError::UnknownToken {
                        token: token.to_string(),
                        sentence: sentence_idx,
                        position,
                    })
            })
            .collect()
    }

    /// Vectorize a batch of sentences, in order.
    ///
    /// Fails on the first unknown token; no partial output is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn try_vectorize(
        &self,
        batch: &[TokenizedSentence],
    ) -> TSResult<Vec<IdSequence<T>>> {
        batch
            .iter()
            .enumerate()
            .map(|(idx, sentence)| self.try_vectorize_sentence(idx, sentence))
            .collect()
    }

    /// Vectorize a batch of sentences on the ``rayon`` pool.
    ///
    /// Produces the same output as [`Self::try_vectorize`]; when several
    /// sentences fail, the error of the earliest sentence is returned.
    #[cfg(feature = "rayon")]
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn try_vectorize_parallel(
        &self,
        batch: &[TokenizedSentence],
    ) -> TSResult<Vec<IdSequence<T>>> {
        use rayon::prelude::*;

        let results: Vec<TSResult<IdSequence<T>>> = batch
            .par_iter()
            .enumerate()
            .map(|(idx, sentence)| self.try_vectorize_sentence(idx, sentence))
            .collect();

        results.into_iter().collect()
    }
}
