//! # Regex Support
//!
//! Tokenizer patterns may be compiled by either `regex` or `fancy_regex`;
//! [`RegexPattern`] labels which, and [`RegexWrapper`] hides the difference.

pub mod regex_pattern;
pub mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::RegexPattern;
#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, RegexWrapper};
