use std::io::Write;

use squadsampler::{
    QaVocab,
    vocab::{VocabBuilder, write_vocab_json},
};

use crate::{LogArgs, common::DatasetArgs, input_output::OutputArgs};

/// Args for the build-vocab command.
#[derive(clap::Args, Debug)]
pub struct BuildVocabArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    dataset: DatasetArgs,

    /// Minimum occurrences for a token to be kept.
    #[arg(long, default_value = "1")]
    min_count: usize,

    /// Max vocab size, reserved tokens included.
    #[arg(long, default_value = None)]
    max_size: Option<usize>,

    #[command(flatten)]
    output: OutputArgs,
}

impl BuildVocabArgs {
    /// Run the build-vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let dataset = self.dataset.load()?;

        log::info!("Counting tokens...");
        let mut builder = VocabBuilder::default();
        builder.update_from_dataset(&dataset);
        log::info!("{} distinct tokens", builder.word_counts().len());

        let vocab: QaVocab<u32> = builder.build(self.min_count, self.max_size)?;
        log::info!("Vocabulary Size: {}", vocab.len());

        let mut writer = self.output.open_writer()?;
        write_vocab_json(&vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
