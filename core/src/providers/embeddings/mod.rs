mod gemini;

pub use gemini::{GeminiEmbeddingModel, DEFAULT_API_URL, DEFAULT_MODEL};
