//! # Answer Alignment
//!
//! Maps character-based answer annotations onto token spans of a
//! tokenized context.
//!
//! An answer aligns only when its character start is exactly the start of
//! some context token; otherwise it is skipped (it starts mid-token, or the
//! context tokenized differently than the answer text). Skips are counted
//! in [`AlignmentStats`], never raised.

mod answer_aligner;
mod answer_span;

#[doc(inline)]
pub use answer_aligner::*;
#[doc(inline)]
pub use answer_span::*;
