use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for experiment-kit operations
pub type Result<T> = std::result::Result<T, KitError>;

/// Error types surfaced by the helpers in this crate
#[derive(Error, Debug)]
pub enum KitError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Console write failed: {0}")]
    Console(#[source] std::io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Only {available} colours available, {requested} requested")]
    Exhausted { requested: usize, available: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KitError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        KitError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
