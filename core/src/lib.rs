//! # docvec - Core API Documentation
//!
//! docvec ingests PDF/DOCX documents into PostgreSQL as embedded paragraph
//! chunks for later semantic retrieval.
//!
//! ## Pipeline
//!
//! One file at a time, four stages in a fixed order:
//!
//! - **Extractor**: resolves the format from the extension and pulls the
//!   plain text out of the file
//! - **Chunker**: splits the text on blank lines into ordered, non-empty
//!   chunks
//! - **Embedder**: one remote `embedContent` call per chunk against a Gemini
//!   embedding model
//! - **Store**: one row per chunk in the `document_embeddings` table
//!
//! Every chunk of a file is embedded before anything is stored, and the
//! Postgres store writes a file's rows in a single transaction, so a failure
//! at any stage leaves no rows behind for that file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use docvec::pipeline::Vectorizer;
//! use docvec::providers::embeddings::{GeminiEmbeddingModel, DEFAULT_API_URL, DEFAULT_MODEL};
//! use docvec::vector_store::postgres::PostgresChunkStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), docvec::error::Error> {
//!     let store = PostgresChunkStore::connect("postgres://localhost/docvec").await?;
//!     let model = GeminiEmbeddingModel::new(
//!         std::env::var("GEMINI_API_KEY").unwrap(),
//!         DEFAULT_API_URL.to_string(),
//!         DEFAULT_MODEL.to_string(),
//!     );
//!
//!     let vectorizer = Vectorizer::init(store, model).await?;
//!     let chunks = vectorizer.process_file("./samples/report.pdf".as_ref()).await?;
//!     println!("stored {chunks} chunks");
//!     Ok(())
//! }
//! ```
//!
//! ## Known limitation
//!
//! `insert` appends unconditionally; re-processing a file creates duplicate
//! rows rather than replacing the earlier ones.
//!
//! ## Feature flags
//!
//! Name | Description | Default?
//! ---|---|---
//! `pdf` | enables the PDF extractor arm (`pdf-extract`) | Yes
//! `docx` | enables the DOCX extractor arm (`docx-rs`) | Yes

/// Splits extracted text into ordered paragraph chunks
pub mod chunker;

/// Process configuration read from the environment
pub mod config;

/// Document, chunk and stored-record types
pub mod document;

/// Text embeddings support
pub mod embeddings;

/// Error types for all library operations
pub mod error;

/// Plain-text extraction from PDF/DOCX files
pub mod extractor;

/// The per-file extract -> chunk -> embed -> store pipeline
pub mod pipeline;

/// Builtin embedding model providers
pub mod providers;

/// Chunk row storage and retrieval
pub mod vector_store;
