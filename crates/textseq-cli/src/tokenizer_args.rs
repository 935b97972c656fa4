use textseq::{
    RegexTokenizer,
    TSResult,
    TokenizedSentence,
    Tokenizer,
    WhitespaceTokenizer,
    tokenize::DEFAULT_WORD_PATTERN,
};

/// Tokenizer selection arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// Word regex; every match is a token.
    #[arg(long, default_value = DEFAULT_WORD_PATTERN)]
    pattern: String,

    /// Split on whitespace instead of using `--pattern`.
    #[arg(long, conflicts_with = "pattern")]
    whitespace: bool,
}

impl TokenizerArgs {
    /// Build the selected tokenizer.
    pub fn build_tokenizer(&self) -> TSResult<CliTokenizer> {
        Ok(if self.whitespace {
            CliTokenizer::Whitespace(WhitespaceTokenizer)
        } else {
            log::debug!("word pattern: {}", self.pattern);
            CliTokenizer::Regex(RegexTokenizer::from_pattern(&self.pattern)?)
        })
    }
}

/// The tokenizers selectable from the command line.
#[derive(Debug, Clone)]
pub enum CliTokenizer {
    Regex(RegexTokenizer),
    Whitespace(WhitespaceTokenizer),
}

impl Tokenizer for CliTokenizer {
    fn try_tokenize(
        &self,
        text: &str,
    ) -> TSResult<TokenizedSentence> {
        match self {
            Self::Regex(tokenizer) => tokenizer.try_tokenize(text),
            Self::Whitespace(tokenizer) => tokenizer.try_tokenize(text),
        }
    }
}
