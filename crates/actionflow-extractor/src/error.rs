//! Error types for the Extractor
//!
//! Only building an [`Extractor`](crate::Extractor) can fail. Extraction itself
//! is total over all input text.

use thiserror::Error;

/// Errors that can occur while building an extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A deadline pattern failed to compile
    #[error("Invalid pattern '{id}': {reason}")]
    InvalidPattern {
        /// Identifier of the offending pattern
        id: String,
        /// Compiler message
        reason: String,
    },

    /// A priority term list failed to compile
    #[error("Invalid priority terms: {0}")]
    InvalidTerms(String),

    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing or serialization error
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}
