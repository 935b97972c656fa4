//! # Vocabulary Id Index

use crate::{
    errors::{TSResult, TextSeqError},
    types::{IdType, TSHashMap, hash_map_with_capacity},
    vocab::Vocabulary,
};

/// The reserved padding word; always assigned id `0`.
///
/// Consumers treat id `0` as padding; this must never be redefined.
pub const PAD_TOKEN: &str = "$$_PAD";

/// Bijective `{ word <-> id }` index over a [`Vocabulary`].
///
/// Ids are dense in `0..len()`; [`PAD_TOKEN`] holds id `0`,
/// and the vocabulary words follow in sorted order from id `1`.
///
/// Instances are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabIndex<T: IdType> {
    /// `{ word -> id }`.
    word2id: TSHashMap<String, T>,

    /// `{ id -> word }`; the id is the position.
    id2word: Vec<String>,
}

impl<T: IdType> VocabIndex<T> {
    /// Build an index over a [`Vocabulary`].
    ///
    /// ## Arguments
    /// * `vocabulary` - The sorted vocabulary.
    ///
    /// ## Returns
    /// The index; or [`TextSeqError::DuplicateToken`] if the vocabulary
    /// contains [`PAD_TOKEN`].
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> TSResult<Self> {
        Self::try_from_words(vocabulary.iter())
    }

    /// Build an index over ordered words.
    ///
    /// [`PAD_TOKEN`] is prepended; `words` receive ids `1..=N` in the
    /// order given.
    ///
    /// ## Errors
    /// * [`TextSeqError::DuplicateToken`] if a word repeats, or is [`PAD_TOKEN`].
    /// * [`TextSeqError::VocabSizeOverflow`] if the ids do not fit in `T`.
    pub fn try_from_words<I, S>(words: I) -> TSResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter();
        let (lower, _) = words.size_hint();

        let mut id2word: Vec<String> = Vec::with_capacity(lower + 1);
        let mut word2id: TSHashMap<String, T> = hash_map_with_capacity(lower + 1);

        for word in core::iter::once(PAD_TOKEN.to_string())
            .chain(words.map(|w| w.as_ref().to_string()))
        {
            let id = id2word.len();
            let token = T::from_usize(id).ok_or(TextSeqError::VocabSizeOverflow { size: id + 1 })?;

            if word2id.contains_key(&word) {
                return Err(TextSeqError::DuplicateToken { token: word });
            }
            word2id.insert(word.clone(), token);
            id2word.push(word);
        }

        Ok(Self { word2id, id2word })
    }

    /// The `{ word -> id }` map.
    pub fn word2id(&self) -> &TSHashMap<String, T> {
        &self.word2id
    }

    /// The `{ id -> word }` table; the id is the position.
    pub fn id2word(&self) -> &[String] {
        &self.id2word
    }

    /// The padding id.
    pub fn pad_id(&self) -> T {
        T::zero()
    }

    /// The number of ids, including the padding id.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.id2word.len()
    }

    /// The largest assigned id.
    pub fn max_id(&self) -> T {
        // `len() >= 1`, and every id was checked to fit `T` on construction.
        T::from_usize(self.len() - 1).unwrap_or_else(T::zero)
    }

    /// Return the id for the word, if any.
    pub fn lookup_id(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word2id.get(word).copied()
    }

    /// Return the word for the id, if any.
    pub fn lookup_word(
        &self,
        id: T,
    ) -> Option<&str> {
        id.to_usize()
            .and_then(|idx| self.id2word.get(idx))
            .map(String::as_str)
    }

    /// Return the id for the word.
    ///
    /// ## Errors
    /// [`TextSeqError::TokenNotFound`]; see [`crate::vectorize::Vectorizer`]
    /// for errors carrying a sentence position.
    pub fn try_lookup_id(
        &self,
        word: &str,
    ) -> TSResult<T> {
        self.lookup_id(word)
            .ok_or_else(|| TextSeqError::TokenNotFound {
                token: word.to_string(),
            })
    }

    /// Return the word for the id.
    pub fn try_lookup_word(
        &self,
        id: T,
    ) -> TSResult<&str> {
        self.lookup_word(id).ok_or_else(|| TextSeqError::UnknownId {
            id: id.to_u64().unwrap_or(u64::MAX),
        })
    }

    /// Map ids back to words.
    ///
    /// ## Arguments
    /// * `ids` - The id sequence.
    /// * `skip_pad` - Drop padding ids from the output.
    pub fn try_decode_sequence(
        &self,
        ids: &[T],
        skip_pad: bool,
    ) -> TSResult<Vec<&str>> {
        ids.iter()
            .filter(|&&id| !(skip_pad && id == self.pad_id()))
            .map(|&id| self.try_lookup_word(id))
            .collect()
    }
}
