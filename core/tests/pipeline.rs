//! End-to-end pipeline tests against a mock Gemini server and the in-memory
//! store. DOCX fixtures are generated on the fly, so nothing here touches the
//! network or a real database.

#![cfg(feature = "docx")]

use std::path::Path;

use docx_rs::{Docx, Paragraph, Run};
use httpmock::prelude::*;
use serde_json::json;

use docvec::embeddings::model::EmbeddingModel;
use docvec::embeddings::EmbedderError;
use docvec::error::Error;
use docvec::extractor::ExtractorError;
use docvec::pipeline::Vectorizer;
use docvec::providers::embeddings::{GeminiEmbeddingModel, DEFAULT_MODEL};
use docvec::vector_store::in_memory::InMemoryChunkStore;
use docvec::vector_store::ChunkStore;

const EMBED_PATH: &str = "/models/text-embedding-004:embedContent";

fn write_docx(path: &Path, paragraphs: &[&str]) {
    let file = std::fs::File::create(path).unwrap();
    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }
    docx.build().pack(file).unwrap();
}

fn gemini_model(base_url: String) -> GeminiEmbeddingModel {
    GeminiEmbeddingModel::new("test-key".to_string(), base_url, DEFAULT_MODEL.to_string())
}

#[tokio::test]
async fn two_paragraph_document_stores_two_rows() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(EMBED_PATH);
            then.status(200)
                .json_body(json!({"embedding": {"values": [0.1, 0.2, 0.3]}}));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_chunks.docx");
    write_docx(&path, &["Hello world.", "This is chunk two."]);

    let vectorizer = Vectorizer::init(InMemoryChunkStore::new(), gemini_model(server.base_url()))
        .await
        .unwrap();

    let stored = vectorizer.process_file(&path).await.unwrap();
    assert_eq!(stored, 2);
    mock.assert_hits_async(2).await;

    let rows = vectorizer
        .store()
        .fetch_by_file("two_chunks.docx")
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].chunk_text, "Hello world.");
    assert_eq!(rows[0].chunk_index, 0);
    assert_eq!(rows[1].chunk_text, "This is chunk two.");
    assert_eq!(rows[1].chunk_index, 1);
    for row in &rows {
        assert_eq!(row.embedding, vec![0.1, 0.2, 0.3]);
    }
}

#[tokio::test]
async fn empty_document_stores_nothing_and_succeeds() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(EMBED_PATH);
            then.status(200)
                .json_body(json!({"embedding": {"values": [0.1]}}));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.docx");
    write_docx(&path, &[]);

    let vectorizer = Vectorizer::init(InMemoryChunkStore::new(), gemini_model(server.base_url()))
        .await
        .unwrap();

    let stored = vectorizer.process_file(&path).await.unwrap();
    assert_eq!(stored, 0);
    assert!(vectorizer.store().is_empty().await);
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn unsupported_extension_fails_and_stores_nothing() {
    let server = MockServer::start_async().await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "Hello world.\n\nThis is chunk two.").unwrap();

    let vectorizer = Vectorizer::init(InMemoryChunkStore::new(), gemini_model(server.base_url()))
        .await
        .unwrap();

    let err = vectorizer.process_file(&path).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Extractor(ExtractorError::UnsupportedFormat { .. })
    ));
    assert!(vectorizer.store().is_empty().await);
}

#[tokio::test]
async fn embedding_failure_aborts_the_whole_file() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(EMBED_PATH);
            then.status(429).body("quota exceeded");
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quota.docx");
    write_docx(&path, &["Hello world.", "This is chunk two."]);

    let vectorizer = Vectorizer::init(InMemoryChunkStore::new(), gemini_model(server.base_url()))
        .await
        .unwrap();

    let err = vectorizer.process_file(&path).await.unwrap_err();
    assert!(matches!(err, Error::Embedder(EmbedderError::ProviderError(_))));
    // Abort-the-file policy: no partial document representation.
    assert!(vectorizer.store().is_empty().await);
}

#[tokio::test]
async fn dimension_change_mid_file_aborts_the_file() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(EMBED_PATH).body_contains("Hello world.");
            then.status(200)
                .json_body(json!({"embedding": {"values": [0.1, 0.2, 0.3]}}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path(EMBED_PATH)
                .body_contains("This is chunk two.");
            then.status(200)
                .json_body(json!({"embedding": {"values": [0.1, 0.2]}}));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dims.docx");
    write_docx(&path, &["Hello world.", "This is chunk two."]);

    let vectorizer = Vectorizer::init(InMemoryChunkStore::new(), gemini_model(server.base_url()))
        .await
        .unwrap();

    let err = vectorizer.process_file(&path).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Embedder(EmbedderError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    ));
    assert!(vectorizer.store().is_empty().await);
}

#[tokio::test]
async fn embedding_dimension_is_constant_for_fixed_input() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(EMBED_PATH);
            then.status(200)
                .json_body(json!({"embedding": {"values": [0.4, 0.5, 0.6, 0.7]}}));
        })
        .await;

    let model = gemini_model(server.base_url());
    let first = model.embed("fixed input").await.unwrap();
    let second = model.embed("fixed input").await.unwrap();
    assert_eq!(first.len(), second.len());
}

#[tokio::test]
async fn reprocessing_a_file_appends_duplicate_rows() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(EMBED_PATH);
            then.status(200)
                .json_body(json!({"embedding": {"values": [1.0]}}));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("again.docx");
    write_docx(&path, &["Only paragraph, no blank lines."]);

    let vectorizer = Vectorizer::init(InMemoryChunkStore::new(), gemini_model(server.base_url()))
        .await
        .unwrap();

    assert_eq!(vectorizer.process_file(&path).await.unwrap(), 1);
    assert_eq!(vectorizer.process_file(&path).await.unwrap(), 1);

    let rows = vectorizer
        .store()
        .fetch_by_file("again.docx")
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
}
