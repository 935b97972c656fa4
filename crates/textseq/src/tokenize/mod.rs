//! # Tokenizers
//!
//! The pipeline only requires the [`Tokenizer`] capability:
//! `text -> ordered tokens`. Two small implementations are provided:
//! * [`RegexTokenizer`] - emits every match of a word pattern.
//! * [`WhitespaceTokenizer`] - splits on unicode whitespace.
//!
//! Any `Fn(&str) -> Vec<String> + Send + Sync` is also a [`Tokenizer`].

pub mod regex_tokenizer;
pub mod whitespace_tokenizer;

#[doc(inline)]
pub use regex_tokenizer::{DEFAULT_WORD_PATTERN, RegexTokenizer};
#[doc(inline)]
pub use whitespace_tokenizer::WhitespaceTokenizer;

use crate::{errors::TSResult, types::TokenizedSentence};

/// Splits a line of text into ordered tokens.
///
/// Implementations must be deterministic; the same text
/// must always produce the same tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize one line of text.
    fn try_tokenize(
        &self,
        text: &str,
    ) -> TSResult<TokenizedSentence>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn try_tokenize(
        &self,
        text: &str,
    ) -> TSResult<TokenizedSentence> {
        Ok(self(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_tokenizer() {
        let tokenizer = |text: &str| text.split(',').map(str::to_string).collect::<Vec<_>>();
        assert_eq!(
            tokenizer.try_tokenize("a,b,c").unwrap(),
            vec!["a", "b", "c"]
        );
    }
}
