pub mod model;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedderError {
    #[error("embedding request failed: {0}")]
    RequestError(String),
    #[error("failed to parse embedding response: {0}")]
    ParseError(String),
    #[error("embedding provider error: {0}")]
    ProviderError(String),
    #[error("embedding provider returned an empty vector")]
    EmptyEmbedding,
    #[error("embedding dimension changed mid-run: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
