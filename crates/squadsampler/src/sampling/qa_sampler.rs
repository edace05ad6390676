use std::{path::Path, sync::Arc};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    alignment::AlignmentStats,
    dataset::{SquadDataset, load_dataset_dir},
    errors::SSResult,
    sampling::{CharOffsetIndex, PoolStats, QaRecord, SamplerOptions, build_pool},
    tokenizer::OffsetTokenizer,
    types::TokenType,
    vocab::QaVocab,
};

/// A batch of records.
pub type QaBatch<T> = Vec<Arc<QaRecord<T>>>;

/// Epoch-cycling batch sampler over a QA record pool.
///
/// The sampler is the only owner of the pool order; batches are handed
/// out as `Arc` clones, so nothing borrows the pool across a reshuffle.
/// Methods which advance the cursor take `&mut self`; concurrent producers
/// should each own a sampler with its own seed.
#[derive(Debug)]
pub struct QaSampler<T: TokenType> {
    options: SamplerOptions,
    tokenizer: OffsetTokenizer<T>,

    records: Vec<Arc<QaRecord<T>>>,
    char_offsets: CharOffsetIndex<T>,
    stats: PoolStats,

    cursor: usize,
    epoch: usize,
    num_batches: usize,

    rng: StdRng,
}

impl<T: TokenType> QaSampler<T> {
    /// Build a sampler over a parsed dataset.
    ///
    /// ## Errors
    /// [`SamplerError::InvalidBatchSize`](crate::SamplerError::InvalidBatchSize)
    /// if the batch size is zero.
    pub fn from_dataset(
        dataset: SquadDataset,
        vocab: Arc<QaVocab<T>>,
        options: SamplerOptions,
    ) -> SSResult<Self> {
        Self::with_tokenizer(dataset, OffsetTokenizer::new(vocab), options)
    }

    /// Build a sampler over the dataset files `filenames` in `dir`.
    pub fn from_dir<P, S>(
        dir: P,
        filenames: &[S],
        vocab: Arc<QaVocab<T>>,
        options: SamplerOptions,
    ) -> SSResult<Self>
    where
        P: AsRef<Path>,
        S: AsRef<Path>,
    {
        options.validate()?;
        let dataset = load_dataset_dir(dir, filenames)?;
        Self::from_dataset(dataset, vocab, options)
    }

    /// Build a sampler with a custom tokenizer.
    pub fn with_tokenizer(
        dataset: SquadDataset,
        tokenizer: OffsetTokenizer<T>,
        options: SamplerOptions,
    ) -> SSResult<Self> {
        options.validate()?;

        let mut rng = StdRng::seed_from_u64(options.seed);
        let pool = build_pool(dataset, &tokenizer, &options, &mut rng);

        Ok(Self {
            options,
            tokenizer,
            records: pool.records,
            char_offsets: pool.char_offsets,
            stats: pool.stats,
            cursor: 0,
            epoch: 0,
            num_batches: 0,
            rng,
        })
    }

    /// The options this sampler was built with.
    pub fn options(&self) -> &SamplerOptions {
        &self.options
    }

    /// The tokenizer used to build the pool.
    pub fn tokenizer(&self) -> &OffsetTokenizer<T> {
        &self.tokenizer
    }

    /// The vocabulary.
    pub fn vocab(&self) -> Option<&Arc<QaVocab<T>>> {
        self.tokenizer.vocab()
    }

    /// The batch size.
    pub fn batch_size(&self) -> usize {
        self.options.batch_size
    }

    /// The number of records in the pool.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the pool empty?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The cursor position, in ``[0, len)``.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Completed passes over the pool.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Batches served since construction.
    pub fn num_batches(&self) -> usize {
        self.num_batches
    }

    /// Batches per full pass, counting a final partial batch.
    pub fn batches_per_epoch(&self) -> usize {
        self.records.len().div_ceil(self.options.batch_size)
    }

    /// Question id to context char offsets.
    pub fn char_offsets(&self) -> &CharOffsetIndex<T> {
        &self.char_offsets
    }

    /// Counters from pool construction.
    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }

    /// Answer alignment outcomes from pool construction.
    pub fn alignment_stats(&self) -> AlignmentStats {
        self.stats.answers
    }

    /// The records in current pool order.
    pub fn records(&self) -> &[Arc<QaRecord<T>>] {
        &self.records
    }

    /// Serve the next batch.
    ///
    /// Returns up to `batch_size` records from the cursor; fewer only for
    /// the last batch of an epoch. When the batch reaches the end of the
    /// pool, the pool is reshuffled, the cursor returns to 0, and the epoch
    /// advances. An empty pool yields empty batches.
    pub fn get_batch(&mut self) -> QaBatch<T> {
        if self.records.is_empty() {
            return Vec::new();
        }

        let end = (self.cursor + self.options.batch_size).min(self.records.len());
        let batch = self.records[self.cursor..end].to_vec();

        self.cursor = end;
        self.num_batches += 1;

        if self.cursor == self.records.len() {
            self.records.shuffle(&mut self.rng);
            self.cursor = 0;
            self.epoch += 1;
            log::trace!("epoch {} complete; pool reshuffled", self.epoch);
        }

        batch
    }

    /// Rewind the cursor to the start of the pool.
    ///
    /// Does not reshuffle and does not change the epoch.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// An endless stream of batches; ends only for an empty pool.
impl<T: TokenType> Iterator for QaSampler<T> {
    type Item = QaBatch<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            Some(self.get_batch())
        }
    }
}
