use crate::embeddings::EmbedderError;
use async_trait::async_trait;

/// A remote embedding model. One call embeds one chunk's text; the returned
/// vector's dimension is model-determined and constant for a fixed model.
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    async fn embed(&self, data: &str) -> Result<Vec<f64>, EmbedderError>;
}
