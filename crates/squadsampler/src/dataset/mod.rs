//! # `SQuAD` Dataset
//!
//! Serde model of the nested `SQuAD` JSON schema,
//! ``data -> paragraphs -> qas -> answers``, and loaders for it.
//!
//! Fields this crate does not interpret are kept in each record's
//! `extra` map, so paragraph and question records can be handed to
//! training code as opaque metadata.

mod loader;
mod squad_json;

#[doc(inline)]
pub use loader::*;
#[doc(inline)]
pub use squad_json::*;
