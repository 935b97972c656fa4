//! # Regex Tokenizer

use crate::{
    errors::TSResult,
    regex::{RegexPattern, RegexWrapper},
    tokenize::Tokenizer,
    types::TokenizedSentence,
};

/// Default word pattern.
///
/// Words (with an optional `'suffix`) and single punctuation marks
/// become separate tokens; whitespace is dropped.
pub const DEFAULT_WORD_PATTERN: &str = r"\w+(?:'\w+)?|[^\w\s]";

/// Tokenizer which emits every match of a word regex.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexTokenizer {
    word_re: RegexWrapper,
}

impl RegexTokenizer {
    /// Build a new [`RegexTokenizer`] from a pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The word pattern.
    pub fn from_pattern<P>(pattern: P) -> TSResult<Self>
    where
        P: Into<RegexPattern>,
    {
        let word_re = pattern.into().compile()?;
        Ok(Self::new(word_re))
    }

    /// Build a new [`RegexTokenizer`] from a compiled regex.
    pub fn new(word_re: RegexWrapper) -> Self {
        Self { word_re }
    }

    /// Get the word regex.
    pub fn word_regex(&self) -> &RegexWrapper {
        &self.word_re
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new(
            regex::Regex::new(DEFAULT_WORD_PATTERN)
                .expect("DEFAULT_WORD_PATTERN compiles")
                .into(),
        )
    }
}

impl Tokenizer for RegexTokenizer {
    fn try_tokenize(
        &self,
        text: &str,
    ) -> TSResult<TokenizedSentence> {
        Ok(self
            .word_re
            .try_find_strs(text)?
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::TextSeqError,
        types::{check_is_send, check_is_sync},
    };

    #[test]
    fn test_default_tokenizer() {
        let tokenizer = RegexTokenizer::default();
        check_is_send(&tokenizer);
        check_is_sync(&tokenizer);

        assert_eq!(
            tokenizer.try_tokenize("the cat sat\n").unwrap(),
            vec!["the", "cat", "sat"]
        );
        assert_eq!(
            tokenizer.try_tokenize("Hello, world! It's 3pm.").unwrap(),
            vec!["Hello", ",", "world", "!", "It's", "3pm", "."]
        );
        assert!(tokenizer.try_tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = RegexTokenizer::from_pattern(r"[a-z]+").unwrap();
        assert_eq!(
            tokenizer.try_tokenize("abc DEF ghi").unwrap(),
            vec!["abc", "ghi"]
        );
        assert!(tokenizer.word_regex().is_basic());
    }

    #[test]
    fn test_bad_pattern() {
        let err = RegexTokenizer::from_pattern("(").unwrap_err();
        assert!(matches!(err, TextSeqError::Regex(_)));
    }
}
