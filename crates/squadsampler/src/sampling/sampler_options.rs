use serde::{Deserialize, Serialize};

use crate::{
    errors::{SSResult, SamplerError},
    types::QaHashSet,
};

/// The default sampler seed.
pub const DEFAULT_SAMPLER_SEED: u64 = 28739;

/// The question types kept by default.
pub const DEFAULT_QUESTION_TYPES: [&str; 2] = ["factoid", "list"];

/// Options for configuring a [`QaSampler`](crate::QaSampler).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerOptions {
    /// Records per batch.
    pub batch_size: usize,

    /// Cap on the pool size; `None` keeps every record.
    #[serde(default)]
    pub instances_per_epoch: Option<usize>,

    /// Shuffle the pool once at construction.
    ///
    /// Epoch-boundary reshuffles happen regardless.
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,

    /// The question types to keep.
    ///
    /// Questions with no type tag are always kept.
    #[serde(default = "default_question_types")]
    pub question_types: Vec<String>,

    /// The generator seed.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_shuffle() -> bool {
    true
}

fn default_question_types() -> Vec<String> {
    DEFAULT_QUESTION_TYPES.iter().map(|s| s.to_string()).collect()
}

fn default_seed() -> u64 {
    DEFAULT_SAMPLER_SEED
}

impl SamplerOptions {
    /// Options with the given batch size and defaults elsewhere.
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size,
            instances_per_epoch: None,
            shuffle: default_shuffle(),
            question_types: default_question_types(),
            seed: default_seed(),
        }
    }

    /// Parse options from JSON; omitted fields take their defaults.
    pub fn from_json_str(json: &str) -> SSResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the options are usable.
    ///
    /// ## Errors
    /// [`SamplerError::InvalidBatchSize`] if `batch_size` is zero.
    pub fn validate(&self) -> SSResult<()> {
        if self.batch_size == 0 {
            return Err(SamplerError::InvalidBatchSize);
        }
        Ok(())
    }

    /// Sets the batch size.
    pub fn set_batch_size(
        &mut self,
        batch_size: usize,
    ) {
        self.batch_size = batch_size;
    }

    /// Sets the batch size.
    pub fn with_batch_size(
        mut self,
        batch_size: usize,
    ) -> Self {
        self.set_batch_size(batch_size);
        self
    }

    /// Sets the pool size cap.
    pub fn set_instances_per_epoch(
        &mut self,
        instances_per_epoch: Option<usize>,
    ) {
        self.instances_per_epoch = instances_per_epoch;
    }

    /// Sets the pool size cap.
    pub fn with_instances_per_epoch(
        mut self,
        instances_per_epoch: Option<usize>,
    ) -> Self {
        self.set_instances_per_epoch(instances_per_epoch);
        self
    }

    /// Sets the construction-time shuffle.
    ///
    /// Epoch-boundary reshuffles happen regardless.
    pub fn set_shuffle(
        &mut self,
        shuffle: bool,
    ) {
        self.shuffle = shuffle;
    }

    /// Sets the construction-time shuffle.
    pub fn with_shuffle(
        mut self,
        shuffle: bool,
    ) -> Self {
        self.set_shuffle(shuffle);
        self
    }

    /// Sets the kept question types.
    pub fn set_question_types<I, S>(
        &mut self,
        question_types: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.question_types = question_types
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
    }

    /// Sets the kept question types.
    pub fn with_question_types<I, S>(
        mut self,
        question_types: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_question_types(question_types);
        self
    }

    /// Sets the generator seed.
    pub fn set_seed(
        &mut self,
        seed: u64,
    ) {
        self.seed = seed;
    }

    /// Sets the generator seed.
    pub fn with_seed(
        mut self,
        seed: u64,
    ) -> Self {
        self.set_seed(seed);
        self
    }

    /// Build the question type filter.
    pub fn type_filter(&self) -> QuestionTypeFilter {
        QuestionTypeFilter::new(&self.question_types)
    }
}

/// Membership test for the kept question types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionTypeFilter {
    accepted: QaHashSet<String>,
}

impl QuestionTypeFilter {
    /// Build a filter accepting `types`.
    pub fn new<S: AsRef<str>>(types: &[S]) -> Self {
        Self {
            accepted: types.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Is a question with this type tag kept?
    ///
    /// Untagged questions always are.
    pub fn accepts(
        &self,
        question_type: Option<&str>,
    ) -> bool {
        match question_type {
            None => true,
            Some(t) => self.accepted.contains(t),
        }
    }
}
