//! # Offset-Aligned Tokenization
//!
//! [`OffsetTokenizer`] converts text into a [`TokenizedText`]: token ids
//! (looked up in an optional [`QaVocab`](crate::vocab::QaVocab)) and the
//! character offset at which each token begins.
//!
//! Offsets count characters (Unicode scalar values), which is the unit
//! `SQuAD`'s ``answer_start`` annotations use.

mod offset_tokenizer;
mod tokenized_text;

#[doc(inline)]
pub use offset_tokenizer::*;
#[doc(inline)]
pub use tokenized_text::*;
