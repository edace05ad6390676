//! # Sampling
//!
//! A [`QaSampler`] owns an in-memory pool of [`QaRecord`]s, built once from
//! a [`SquadDataset`](crate::dataset::SquadDataset), and serves fixed-size
//! batches from it:
//!
//! * the pool is (optionally) shuffled, then (optionally) capped to
//!   `instances_per_epoch` records, at construction;
//! * [`QaSampler::get_batch`] walks a cursor over the pool; when the cursor
//!   reaches the end, the pool is reshuffled and the epoch advances;
//! * all randomness comes from one generator owned by the sampler, seeded
//!   from [`SamplerOptions::seed`]; equal seeds and inputs give equal
//!   batch streams.
//!
//! The sampler also keeps a [`CharOffsetIndex`] from question id to the
//! context's token char offsets, for mapping predicted token spans back
//! to characters.

mod char_offsets;
mod pool_builder;
mod qa_record;
mod qa_sampler;
mod sampler_options;

#[doc(inline)]
pub use char_offsets::*;
#[doc(inline)]
pub use pool_builder::*;
#[doc(inline)]
pub use qa_record::*;
#[doc(inline)]
pub use qa_sampler::*;
#[doc(inline)]
pub use sampler_options::*;
