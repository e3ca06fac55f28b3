use crate::{
    config::ConfigError, embeddings::EmbedderError, extractor::ExtractorError,
    vector_store::VectorStoreError,
};
use thiserror::Error;

/// Any stage failure aborts processing of the current file; the process then
/// exits non-zero. There is no retry and no partial commit.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Extractor(#[from] ExtractorError),
    #[error(transparent)]
    Embedder(#[from] EmbedderError),
    #[error(transparent)]
    VectorStore(#[from] VectorStoreError),
}
