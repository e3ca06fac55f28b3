use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ChunkStore, VectorStoreError};
use crate::document::ChunkRecord;

/// In-memory store, used by tests and local experiments. Keeps rows in
/// insertion order.
#[derive(Default)]
pub struct InMemoryChunkStore {
    records: RwLock<Vec<ChunkRecord>>,
}

impl InMemoryChunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ChunkStore for InMemoryChunkStore {
    async fn ensure_schema(&self) -> Result<(), VectorStoreError> {
        Ok(())
    }

    async fn insert(&self, record: ChunkRecord) -> Result<(), VectorStoreError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn fetch_by_file(&self, file_name: &str) -> Result<Vec<ChunkRecord>, VectorStoreError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.file_name == file_name)
            .cloned()
            .collect())
    }
}
