//! # `textseq` Text to Id-Sequence Preprocessing
//!
//! `textseq` turns raw text lines into fixed-length integer sequences,
//! ready to be fed to a downstream model.
//!
//! The stages, leaves first:
//! * [`tokenize`] - the [`Tokenizer`] capability, and two implementations.
//! * [`vocab`] - build the sorted corpus [`Vocabulary`], and the [`VocabIndex`]
//!   `{ word <-> id }` mapping with [`PAD_TOKEN`] reserved at id `0`.
//! * [`vectorize`] - rewrite tokenized sentences as id sequences.
//! * [`padding`] - pad id sequences to a common length (left, by default).
//! * [`pipeline`] - all of the above, from a corpus in one call.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use textseq::{Pipeline, PAD_TOKEN};
//!
//! let pipeline: Pipeline<u32> = Pipeline::default();
//! let output = pipeline.process_lines(["the cat sat", "the dog ran fast"])?;
//!
//! assert_eq!(output.word2id()["the"], 6);
//! assert_eq!(output.word2id()[PAD_TOKEN], 0);
//! assert_eq!(
//!     output.sequences.rows(),
//!     &[vec![0, 6, 1, 5], vec![6, 2, 4, 3]]
//! );
//! # Ok::<(), textseq::TextSeqError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod errors;
pub mod padding;
pub mod pipeline;
pub mod regex;
pub mod tokenize;
pub mod types;
pub mod vectorize;
pub mod vocab;

#[doc(inline)]
pub use errors::{TSResult, TextSeqError};
#[doc(inline)]
pub use padding::{PadSide, PaddedBatch, PaddingOptions, try_pad};
#[doc(inline)]
pub use pipeline::{Pipeline, PipelineOptions, PipelineOutput, Sequences};
#[doc(inline)]
pub use tokenize::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};
#[doc(inline)]
pub use types::{IdSequence, IdType, TokenizedSentence};
#[doc(inline)]
pub use vectorize::Vectorizer;
#[doc(inline)]
pub use vocab::{PAD_TOKEN, VocabIndex, Vocabulary, VocabularyBuilder};
