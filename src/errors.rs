//! Error types for the synthesis engine

use thiserror::Error;

/// Main error type for synthesis operations
#[derive(Error, Debug)]
pub enum SynthesisError {
    /// An external collaborator (summarizer or lesson store) failed.
    ///
    /// Fails the whole invocation; no partial result is returned since a
    /// result's fields are tightly coupled (consensus feeds alignment).
    #[error("Collaborator failure: {0}")]
    Collaborator(#[from] anyhow::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for synthesis operations
pub type Result<T> = std::result::Result<T, SynthesisError>;
