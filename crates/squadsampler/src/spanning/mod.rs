//! # Text Spanning
//!
//! This module exists to factor out word/gap scanning.
//!
//! A [`WordSpanner`] walks a text left to right and labels every byte as
//! part of a [`SpanRef::Word`] or a [`SpanRef::Gap`]. The default spanner
//! uses [`WORD_OR_PUNCT_PATTERN`](crate::regex::WORD_OR_PUNCT_PATTERN),
//! so gaps are exactly the whitespace runs.

mod word_spanner;

#[doc(inline)]
pub use word_spanner::*;
