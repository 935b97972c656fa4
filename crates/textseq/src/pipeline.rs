//! # Corpus Pipeline
//!
//! `corpus -> tokens -> vocabulary -> ids -> padded batch`, in one call.
//!
//! Every call builds its own [`VocabIndex`]; nothing is shared between calls.

use std::{io::BufRead, path::Path};

use crate::{
    corpus::{read_corpus, read_corpus_path},
    errors::TSResult,
    padding::{PadSide, PaddedBatch, PaddingOptions, try_pad},
    tokenize::{RegexTokenizer, Tokenizer},
    types::{IdSequence, IdType, TSHashMap},
    vectorize::Vectorizer,
    vocab::{VocabIndex, VocabularyBuilder},
};

/// Options for [`Pipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions<T: IdType> {
    /// Pad the output to a common length.
    pub padding: bool,

    /// The padding configuration; ignored when `padding` is off.
    pub padding_options: PaddingOptions<T>,

    /// Vectorize sentences on the ``rayon`` pool.
    ///
    /// Has no effect without the "rayon" feature.
    pub parallel: bool,
}

impl<T: IdType> Default for PipelineOptions<T> {
    fn default() -> Self {
        Self {
            padding: true,
            padding_options: PaddingOptions::default(),
            parallel: false,
        }
    }
}

impl<T: IdType> PipelineOptions<T> {
    /// Enable or disable padding.
    pub fn with_padding(
        self,
        padding: bool,
    ) -> Self {
        Self { padding, ..self }
    }

    /// Set the padding target length.
    pub fn with_target_len(
        self,
        target_len: Option<usize>,
    ) -> Self {
        Self {
            padding_options: self.padding_options.with_target_len(target_len),
            ..self
        }
    }

    /// Set the padding value.
    pub fn with_pad_val(
        self,
        pad_val: T,
    ) -> Self {
        Self {
            padding_options: self.padding_options.with_pad_val(pad_val),
            ..self
        }
    }

    /// Set the padding side.
    pub fn with_pad_side(
        self,
        side: PadSide,
    ) -> Self {
        Self {
            padding_options: self.padding_options.with_side(side),
            ..self
        }
    }

    /// Enable or disable parallel vectorization.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }
}

/// The id sequences produced by [`Pipeline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequences<T: IdType> {
    /// Padding was applied.
    Padded(PaddedBatch<T>),

    /// Padding was disabled; rows keep their sentence lengths.
    Unpadded(Vec<IdSequence<T>>),
}

impl<T: IdType> Sequences<T> {
    /// The rows, padded or not.
    pub fn rows(&self) -> &[IdSequence<T>] {
        match self {
            Self::Padded(batch) => batch.rows(),
            Self::Unpadded(rows) => rows,
        }
    }

    /// Release the rows.
    pub fn into_rows(self) -> Vec<IdSequence<T>> {
        match self {
            Self::Padded(batch) => batch.into_rows(),
            Self::Unpadded(rows) => rows,
        }
    }

    /// The padded batch, if padding was applied.
    pub fn padded(&self) -> Option<&PaddedBatch<T>> {
        match self {
            Self::Padded(batch) => Some(batch),
            Self::Unpadded(_) => None,
        }
    }
}

/// The result of a [`Pipeline`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput<T: IdType> {
    /// One row per corpus line.
    pub sequences: Sequences<T>,

    /// The index the rows were built with.
    pub index: VocabIndex<T>,
}

impl<T: IdType> PipelineOutput<T> {
    /// The `{ word -> id }` map.
    pub fn word2id(&self) -> &TSHashMap<String, T> {
        self.index.word2id()
    }

    /// The `{ id -> word }` table.
    pub fn id2word(&self) -> &[String] {
        self.index.id2word()
    }
}

/// Corpus to id-batch pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline<T: IdType, K: Tokenizer = RegexTokenizer> {
    tokenizer: K,
    options: PipelineOptions<T>,
}

impl<T: IdType> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new(RegexTokenizer::default(), PipelineOptions::default())
    }
}

impl<T: IdType, K: Tokenizer> Pipeline<T, K> {
    /// Create a new pipeline.
    ///
    /// ## Arguments
    /// * `tokenizer` - Splits each corpus line into tokens.
    /// * `options` - Padding and execution options.
    pub fn new(
        tokenizer: K,
        options: PipelineOptions<T>,
    ) -> Self {
        Self { tokenizer, options }
    }

    /// The tokenizer.
    pub fn tokenizer(&self) -> &K {
        &self.tokenizer
    }

    /// The options.
    pub fn options(&self) -> &PipelineOptions<T> {
        &self.options
    }

    /// Run the pipeline over the lines of a file.
    pub fn process_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> TSResult<PipelineOutput<T>> {
        self.process_lines(read_corpus_path(path)?)
    }

    /// Run the pipeline over the lines of a reader.
    pub fn process_reader<R: BufRead>(
        &self,
        reader: R,
    ) -> TSResult<PipelineOutput<T>> {
        self.process_lines(read_corpus(reader)?)
    }

    /// Run the pipeline over corpus lines.
    ///
    /// Either every stage succeeds, or the first error is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, lines)))]
    pub fn process_lines<I>(
        &self,
        lines: I,
    ) -> TSResult<PipelineOutput<T>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let built = VocabularyBuilder::build(&self.tokenizer, lines)?;
        log::info!(
            "corpus: {} lines, {} unique tokens",
            built.tokenized.len(),
            built.vocabulary.len()
        );

        let index = VocabIndex::<T>::from_vocabulary(&built.vocabulary)?;

        let vectorizer = Vectorizer::new(&index);
        let rows = self.vectorize(&vectorizer, &built.tokenized)?;

        let sequences = if self.options.padding {
            let batch = try_pad(&rows, &self.options.padding_options)?;
            log::info!("padded batch shape: {:?}", batch.shape());
            Sequences::Padded(batch)
        } else {
            Sequences::Unpadded(rows)
        };

        Ok(PipelineOutput { sequences, index })
    }

    fn vectorize(
        &self,
        vectorizer: &Vectorizer<'_, T>,
        tokenized: &[Vec<String>],
    ) -> TSResult<Vec<IdSequence<T>>> {
        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                if self.options.parallel {
                    return vectorizer.try_vectorize_parallel(tokenized);
                }
            } else {
                if self.options.parallel {
                    log::debug!("parallel vectorization requested without the \"rayon\" feature");
                }
            }
        }
        vectorizer.try_vectorize(tokenized)
    }
}
