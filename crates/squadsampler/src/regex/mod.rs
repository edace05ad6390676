//! # Regex Utilities
//!
//! Span patterns may be plain `regex` patterns or `fancy_regex`
//! patterns (look-around, possessive quantifiers). [`RegexPattern`] labels
//! which engine a pattern targets; [`RegexWrapper`] hides the difference.

mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
