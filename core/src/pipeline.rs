use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::chunker;
use crate::document::ChunkRecord;
use crate::embeddings::{model::EmbeddingModel, EmbedderError};
use crate::error::Error;
use crate::extractor;
use crate::vector_store::ChunkStore;

/// The pipeline context: owns the store and the embedding model for the
/// lifetime of the process and runs one file at a time through
/// extract -> chunk -> embed -> store.
///
/// Replaces process-lifetime singletons; built once at startup and torn down
/// on exit.
pub struct Vectorizer<S: ChunkStore, M: EmbeddingModel> {
    store: S,
    model: M,
}

impl<S: ChunkStore, M: EmbeddingModel> Vectorizer<S, M> {
    /// Ensures the backing schema exists, then returns the context.
    pub async fn init(store: S, model: M) -> Result<Self, Error> {
        store.ensure_schema().await?;
        Ok(Self { store, model })
    }

    /// Processes a single file start to finish, returning the number of
    /// stored chunks.
    ///
    /// Chunks are embedded strictly in sequence, every chunk before anything
    /// is stored; together with the store's all-or-nothing `insert_all`, a
    /// failure at any stage leaves no rows for the file. A document with no
    /// chunks stores nothing and still succeeds.
    pub async fn process_file(&self, path: &Path) -> Result<usize, Error> {
        let document = extractor::extract(path)?;
        let file_name = document.file_name();
        info!(file = %file_name, "processing file");

        let mut records = Vec::new();
        let mut dimension: Option<usize> = None;
        for chunk in chunker::chunks(&document.text) {
            let embedding = self.model.embed(&chunk.text).await?;
            match dimension {
                None => dimension = Some(embedding.len()),
                Some(expected) if expected != embedding.len() => {
                    return Err(EmbedderError::DimensionMismatch {
                        expected,
                        actual: embedding.len(),
                    }
                    .into());
                }
                Some(_) => {}
            }
            records.push(ChunkRecord {
                chunk_text: chunk.text,
                embedding,
                file_name: file_name.clone(),
                chunk_index: chunk.index as i32,
                created_at: Utc::now(),
            });
        }

        let stored = records.len();
        self.store.insert_all(records).await?;
        info!(file = %file_name, chunks = stored, "stored chunks");
        Ok(stored)
    }

    /// The underlying store, for teardown and post-run queries.
    pub fn store(&self) -> &S {
        &self.store
    }
}
