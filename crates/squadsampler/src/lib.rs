//! # `squadsampler` QA Batch Sampling
//!
//! Offset-aligned tokenization and reproducible, epoch-cycling
//! mini-batch sampling for `SQuAD`-style question-answering datasets.
//!
//! See:
//! * [`spanning`] to split text into word-or-punctuation spans.
//! * [`tokenizer`] to turn text into token ids and character offsets.
//! * [`alignment`] to map character answer annotations onto token spans.
//! * [`dataset`] for the `SQuAD` JSON model and file loading.
//! * [`sampling`] to build a record pool and draw batches from it.
//! * [`vocab`] to load, save, and build token vocabularies.
//!
//! ## Sampling Batches
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use squadsampler::{
//!     QaSampler,
//!     SamplerOptions,
//!     dataset::load_dataset_dir,
//!     vocab::load_vocab_path,
//! };
//!
//! # fn main() -> squadsampler::SSResult<()> {
//! let vocab = Arc::new(load_vocab_path::<u32, _>("~/data/vocab.json")?);
//! let dataset = load_dataset_dir("~/data/squad", &["train-v1.1.json"])?;
//!
//! let options = SamplerOptions::new(32).with_instances_per_epoch(Some(10_000));
//! let mut sampler = QaSampler::from_dataset(dataset, vocab, options)?;
//!
//! let batch = sampler.get_batch();
//! for record in &batch {
//!     let offsets = sampler.char_offsets().get(record.id()).unwrap();
//!     println!("{} {:?} {}", record.id(), record.answer_spans(), offsets.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod alignment;
pub mod dataset;
pub mod errors;
pub mod regex;
pub mod sampling;
pub mod spanning;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{SSResult, SamplerError};
#[doc(inline)]
pub use sampling::{QaRecord, QaSampler, SamplerOptions};
#[doc(inline)]
pub use tokenizer::{OffsetTokenizer, TokenizedText};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::QaVocab;
