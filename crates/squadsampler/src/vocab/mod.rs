//! # Vocabulary
//!
//! [`QaVocab`] maps token strings to ids and carries the three reserved
//! entries every sampler relies on:
//! * [`UNK_TOKEN`] - the fallback for out-of-vocabulary tokens,
//! * [`START_TOKEN`] - sequence start,
//! * [`END_TOKEN`] - sequence end.
//!
//! Vocabularies are read and written as flat ``{"token": id}`` JSON objects
//! (see [`io`]), and can be bootstrapped from a dataset with
//! [`VocabBuilder`].

pub mod io;
pub mod qa_vocab;
pub mod vocab_builder;

#[doc(inline)]
pub use io::{load_vocab_path, read_vocab_json, save_vocab_path, write_vocab_json};
#[doc(inline)]
pub use qa_vocab::{END_TOKEN, QaVocab, RESERVED_TOKENS, START_TOKEN, TokenMap, UNK_TOKEN};
#[doc(inline)]
pub use vocab_builder::VocabBuilder;
