use std::io::Write;

use serde_json::json;

use crate::{
    LogArgs,
    common::{DatasetArgs, SamplerArgs, VocabArgs},
    input_output::OutputArgs,
};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    dataset: DatasetArgs,

    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    sampler: SamplerArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let sampler = self.sampler.build(&self.dataset, &self.vocab)?;
        let vocab_size = sampler.vocab().map(|v| v.len()).unwrap_or_default();

        let report = json!({
            "records": sampler.len(),
            "batch_size": sampler.batch_size(),
            "batches_per_epoch": sampler.batches_per_epoch(),
            "indexed_questions": sampler.char_offsets().len(),
            "vocab_size": vocab_size,
            "options": sampler.options(),
            "stats": sampler.stats(),
        });

        let mut writer = self.output.open_writer()?;
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(())
    }
}
