//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from squadsampler operations.
///
/// Sampling itself never fails; these cover the fallible edges:
/// configuration, vocabulary construction, and file io.
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    /// A reserved vocabulary entry (`<UNK>`, `<S>`, `</S>`) is absent.
    #[error("vocabulary is missing reserved token {token:?}")]
    MissingReservedToken {
        /// The missing token string.
        token: String,
    },

    /// Batch size must be non-zero.
    #[error("batch size must be > 0")]
    InvalidBatchSize,

    /// A directory source was given with no filenames.
    #[error("no dataset files given for directory '{dir}'")]
    NoInputFiles {
        /// The dataset directory.
        dir: String,
    },

    /// Token id out of range for the target type.
    #[error("token id ({id}) exceeds token type capacity")]
    TokenOutOfRange {
        /// The id which did not fit.
        id: u64,
    },

    /// Regex compilation error.
    #[error(transparent)]
    Regex(#[from] ErrorWrapper),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for squadsampler operations.
pub type SSResult<T> = core::result::Result<T, SamplerError>;
