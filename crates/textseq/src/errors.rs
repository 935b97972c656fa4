//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from textseq operations.
#[derive(Debug, thiserror::Error)]
pub enum TextSeqError {
    /// A padding target was shorter than the longest sequence in the batch.
    ///
    /// Sequences are never truncated to fit.
    #[error("padding length error: should be at least {required}, given length: {requested}")]
    PaddingLength {
        /// The length of the longest sequence.
        required: usize,

        /// The requested target length.
        requested: usize,
    },

    /// A token was not present in the vocabulary index.
    #[error("unknown token {token:?} in sentence {sentence} at position {position}")]
    UnknownToken {
        /// The missing token.
        token: String,

        /// The index of the sentence containing the token.
        sentence: usize,

        /// The position of the token within the sentence.
        position: usize,
    },

    /// A word was not present in the vocabulary index.
    ///
    /// Raised by direct index lookups, which have no sentence context.
    #[error("unknown token {token:?}")]
    TokenNotFound {
        /// The missing token.
        token: String,
    },

    /// An id was not assigned to any vocabulary word.
    #[error("unknown id {id}")]
    UnknownId {
        /// The id, widened to `u64`.
        id: u64,
    },

    /// A word occurred more than once while assigning ids.
    #[error("duplicate token {token:?} in vocabulary")]
    DuplicateToken {
        /// The repeated token.
        token: String,
    },

    /// Vocab size exceeds the capacity of the target id type.
    #[error("vocab size ({size}) exceeds id type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Tokenizer pattern error.
    #[error("regex error: {0}")]
    Regex(#[from] ErrorWrapper),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for textseq operations.
pub type TSResult<T> = core::result::Result<T, TextSeqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_length_message() {
        let err = TextSeqError::PaddingLength {
            required: 5,
            requested: 3,
        };
        assert_eq!(
            err.to_string(),
            "padding length error: should be at least 5, given length: 3"
        );
    }

    #[test]
    fn test_unknown_token_messages() {
        let err = TextSeqError::TokenNotFound {
            token: "zzz".to_string(),
        };
        assert_eq!(err.to_string(), "unknown token \"zzz\"");

        let err = TextSeqError::UnknownToken {
            token: "zzz".to_string(),
            sentence: 2,
            position: 1,
        };
        assert_eq!(
            err.to_string(),
            "unknown token \"zzz\" in sentence 2 at position 1"
        );
    }

    #[test]
    fn test_io_from() {
        let err: TextSeqError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, TextSeqError::Io(_)));
    }
}
