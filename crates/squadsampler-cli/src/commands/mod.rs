mod batches;
mod build_vocab;
mod inspect;

/// Subcommands for squadsampler
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a sampler and report pool statistics.
    Inspect(inspect::InspectArgs),

    /// Emit batches as JSON lines.
    Batches(batches::BatchesArgs),

    /// Build a vocabulary from a dataset.
    BuildVocab(build_vocab::BuildVocabArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Batches(cmd) => cmd.run(),
            Commands::BuildVocab(cmd) => cmd.run(),
        }
    }
}
