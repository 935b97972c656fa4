//! # Vocabulary
//!
//! Vocabulary construction runs in two steps:
//! * [`VocabularyBuilder`] - tokenizes every corpus line and accumulates
//!   the corpus-wide, sorted, deduplicated [`Vocabulary`].
//! * [`VocabIndex`] - assigns dense ids over the vocabulary, with
//!   [`PAD_TOKEN`] reserved at id `0`.

pub mod vocab_builder;
pub mod vocab_index;
pub mod vocabulary;

#[doc(inline)]
pub use vocab_builder::{BuiltVocabulary, VocabularyBuilder};
#[doc(inline)]
pub use vocab_index::{PAD_TOKEN, VocabIndex};
#[doc(inline)]
pub use vocabulary::Vocabulary;
