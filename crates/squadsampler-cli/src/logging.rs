use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

/// Map a verbosity count onto a log level; 3 is `Info`.
fn level_for(verbosity: u8) -> LogLevelNum {
    match verbosity {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

impl LogArgs {
    /// The effective verbosity; `default` unless `-v` was given.
    pub fn verbosity(
        &self,
        default: u8,
    ) -> u8 {
        match self.verbose {
            Some(verbose) if verbose > 0 => verbose,
            _ => default,
        }
    }

    /// Install the stderr logger.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = if self.ts {
            Timestamp::Second
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(level_for(self.verbosity(default)))
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}
