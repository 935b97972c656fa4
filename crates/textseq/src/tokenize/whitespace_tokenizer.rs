//! # Whitespace Tokenizer

use crate::{errors::TSResult, tokenize::Tokenizer, types::TokenizedSentence};

/// Tokenizer which splits on unicode whitespace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn try_tokenize(
        &self,
        text: &str,
    ) -> TSResult<TokenizedSentence> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}
