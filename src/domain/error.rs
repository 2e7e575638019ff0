use std::io;

use thiserror::Error;

/// Library-wide error type for sample operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// `process_data` was given no items.
    #[error("Empty input: no items to process")]
    EmptyInput,

    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Configuration could not be parsed.
    #[error("Invalid config: {0}")]
    ConfigInvalid(String),
}
