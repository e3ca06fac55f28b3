pub mod in_memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::document::ChunkRecord;

#[derive(Debug, Error)]
pub enum VectorStoreError {
    #[error("failed to connect to the store: {0}")]
    Connection(String),
    #[error("failed to create schema: {0}")]
    Schema(String),
    #[error("failed to insert record: {0}")]
    Insert(String),
    #[error("failed to fetch records: {0}")]
    Fetch(String),
}

/// Storage seam for persisted chunk rows.
///
/// `insert` appends unconditionally; there is no upsert-by-content, so
/// re-processing a file creates duplicate rows. Insertion order need not be
/// preserved by the backing store.
#[async_trait]
pub trait ChunkStore: Send + Sync {
    /// Idempotent check-or-create of the backing schema. Safe to call every
    /// run, including concurrent first runs.
    async fn ensure_schema(&self) -> Result<(), VectorStoreError>;

    /// Appends one row.
    async fn insert(&self, record: ChunkRecord) -> Result<(), VectorStoreError>;

    /// Stores one file's rows as a unit. Implementations should make this
    /// all-or-nothing so a mid-file failure leaves no partial document.
    async fn insert_all(&self, records: Vec<ChunkRecord>) -> Result<(), VectorStoreError> {
        for record in records {
            self.insert(record).await?;
        }
        Ok(())
    }

    /// All rows previously stored for `file_name`.
    async fn fetch_by_file(&self, file_name: &str) -> Result<Vec<ChunkRecord>, VectorStoreError>;
}
