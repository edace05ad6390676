use std::{
    fs::File,
    io::{BufWriter, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => {
                log::info!("output: {p}");
                Box::new(BufWriter::new(File::create(p)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
