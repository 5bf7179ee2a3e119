//! Error types for the byte-pair tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Text could not be converted to or from bytes under the configured encoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Encode or decode was called before training completed
    #[error("Model not trained")]
    Untrained,

    /// Training is one-shot; the model is already frozen
    #[error("Model already trained")]
    AlreadyTrained,

    /// Unknown token ID
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Symbol not in vocabulary
    #[error("Symbol not in vocabulary: {0}")]
    UnknownSymbol(String),

    /// Error loading vocabulary or merges
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving vocabulary or merges
    #[error("Save error: {0}")]
    Save(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenizerError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }

    /// True for the lookup failures (unknown id or unknown symbol).
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::UnknownTokenId(_) | Self::UnknownSymbol(_))
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
