use std::{fs, sync::Arc};

use squadsampler::{
    QaSampler,
    QaVocab,
    SamplerOptions,
    dataset::{SquadDataset, expand_path, load_dataset_dir},
    vocab::load_vocab_path,
};

/// Batch size used when neither `--batch-size` nor an options file gives one.
pub const DEFAULT_BATCH_SIZE: usize = 32;

/// Dataset source arg group.
#[derive(clap::Args, Debug)]
pub struct DatasetArgs {
    /// Dataset directory; `~` and `$VAR` are expanded.
    #[arg(long)]
    data_dir: String,

    /// Dataset file names, relative to `--data-dir`; read in order.
    #[arg(long, num_args = 1.., required = true)]
    files: Vec<String>,
}

impl DatasetArgs {
    /// Load and concatenate the dataset files.
    pub fn load(&self) -> Result<SquadDataset, Box<dyn std::error::Error>> {
        log::info!("Loading {} file(s) from {}", self.files.len(), self.data_dir);
        let dataset = load_dataset_dir(&self.data_dir, &self.files)?;
        log::info!(
            "{} questions in {} paragraphs",
            dataset.num_questions(),
            dataset.num_paragraphs()
        );
        Ok(dataset)
    }
}

/// Vocabulary source arg group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Vocabulary JSON file (``{"token": id}``).
    #[arg(long)]
    vocab: String,
}

impl VocabArgs {
    /// Load the vocabulary.
    pub fn load(&self) -> Result<Arc<QaVocab<u32>>, Box<dyn std::error::Error>> {
        let vocab: QaVocab<u32> = load_vocab_path(&self.vocab)?;
        log::info!("Vocabulary Size: {}", vocab.len());
        Ok(Arc::new(vocab))
    }
}

/// Sampler configuration arg group.
///
/// Flags override the fields of `--options`.
#[derive(clap::Args, Debug)]
pub struct SamplerArgs {
    /// Sampler options JSON file.
    #[arg(long, default_value = None)]
    options: Option<String>,

    /// Records per batch.
    #[arg(long, default_value = None)]
    batch_size: Option<usize>,

    /// Cap on the number of records in the pool.
    #[arg(long, default_value = None)]
    instances_per_epoch: Option<usize>,

    /// Keep dataset order at construction.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_shuffle: bool,

    /// Question types to keep; repeat or comma separate.
    #[arg(long = "type", value_delimiter = ',')]
    types: Vec<String>,

    /// Sampler seed.
    #[arg(long, default_value = None)]
    seed: Option<u64>,
}

impl SamplerArgs {
    /// Resolve the sampler options.
    pub fn options(&self) -> Result<SamplerOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.options {
            Some(path) => {
                let json = fs::read_to_string(expand_path(path)?)?;
                SamplerOptions::from_json_str(&json)?
            }
            None => SamplerOptions::new(DEFAULT_BATCH_SIZE),
        };

        if let Some(batch_size) = self.batch_size {
            options.set_batch_size(batch_size);
        }
        if self.instances_per_epoch.is_some() {
            options.set_instances_per_epoch(self.instances_per_epoch);
        }
        if self.no_shuffle {
            options.set_shuffle(false);
        }
        if !self.types.is_empty() {
            options.set_question_types(&self.types);
        }
        if let Some(seed) = self.seed {
            options.set_seed(seed);
        }

        options.validate()?;
        Ok(options)
    }

    /// Load the dataset and vocabulary, and build a sampler.
    pub fn build(
        &self,
        dataset: &DatasetArgs,
        vocab: &VocabArgs,
    ) -> Result<QaSampler<u32>, Box<dyn std::error::Error>> {
        let options = self.options()?;
        log::debug!("{options:?}");

        let sampler = QaSampler::from_dataset(dataset.load()?, vocab.load()?, options)?;
        Ok(sampler)
    }
}
