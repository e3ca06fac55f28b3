use crate::embeddings::{model::EmbeddingModel, EmbedderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Base URL of the Gemini generative language API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default embedding model.
pub const DEFAULT_MODEL: &str = "text-embedding-004";

// The remote call would otherwise block the pipeline indefinitely; expiry
// surfaces as a RequestError and aborts the file.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Implementation of the `EmbeddingModel` trait for the Gemini
/// `embedContent` endpoint.
///
/// One request embeds one chunk's text; there is no batching, caching or
/// deduplication of identical inputs.
pub struct GeminiEmbeddingModel {
    api_key: String,
    api_url: String,
    model: String,
    client: Client,
}

impl GeminiEmbeddingModel {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            api_key,
            api_url,
            model,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:embedContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Deserialize)]
struct GeminiEmbedContentResponse {
    embedding: GeminiEmbeddingValues,
}

#[derive(Deserialize)]
struct GeminiEmbeddingValues {
    values: Vec<f64>,
}

#[async_trait]
impl EmbeddingModel for GeminiEmbeddingModel {
    async fn embed(&self, data: &str) -> Result<Vec<f64>, EmbedderError> {
        let request_body = json!({
            "model": format!("models/{}", self.model),
            "content": { "parts": [{ "text": data }] },
        });
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| EmbedderError::RequestError(e.to_string()))?;

        if response.status().is_success() {
            let response = response
                .json::<GeminiEmbedContentResponse>()
                .await
                .map_err(|e| EmbedderError::ParseError(e.to_string()))?;

            if response.embedding.values.is_empty() {
                return Err(EmbedderError::EmptyEmbedding);
            }
            Ok(response.embedding.values)
        } else {
            let error_message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            Err(EmbedderError::ProviderError(error_message))
        }
    }
}
