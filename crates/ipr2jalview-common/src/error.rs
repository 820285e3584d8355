//! Error types for the conversion pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, IprError>;

/// Main error type for the conversion pipeline
#[derive(Error, Debug)]
pub enum IprError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(
        "Colour palette exhausted: {required} feature types but only {available} colours. \
         Restrict the entries with --interpro to reduce the number of types."
    )]
    PaletteExhausted { required: usize, available: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IprError {
    /// Create a palette exhaustion error
    pub fn palette_exhausted(required: usize, available: usize) -> Self {
        Self::PaletteExhausted {
            required,
            available,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
