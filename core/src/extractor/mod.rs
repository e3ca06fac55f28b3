//! Module for extracting plain text from source documents.
//!
//! The format is resolved once from the file extension; each supported format
//! has its own pure file-to-text arm (`pdf`, `docx`). A parse failure fails
//! the whole file, never a partial result.

#[cfg(feature = "docx")]
mod docx;
#[cfg(feature = "pdf")]
mod pdf;

use std::path::Path;
use thiserror::Error;

use crate::document::{Document, DocumentFormat};

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("unsupported file format `.{extension}`: {path}")]
    UnsupportedFormat { path: String, extension: String },
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Extracts the full plain text of the file at `path`.
///
/// The only side effect is reading the file.
pub fn extract(path: &Path) -> Result<Document, ExtractorError> {
    let format = resolve_format(path)?;
    let text = match format {
        #[cfg(feature = "pdf")]
        DocumentFormat::Pdf => pdf::extract_text(path)?,
        #[cfg(feature = "docx")]
        DocumentFormat::Docx => docx::extract_text(path)?,
        #[allow(unreachable_patterns)]
        _ => return Err(unsupported(path)),
    };
    Ok(Document {
        path: path.to_path_buf(),
        format,
        text: text.trim().to_string(),
    })
}

fn resolve_format(path: &Path) -> Result<DocumentFormat, ExtractorError> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(DocumentFormat::from_extension)
        .ok_or_else(|| unsupported(path))
}

fn unsupported(path: &Path) -> ExtractorError {
    ExtractorError::UnsupportedFormat {
        path: path.display().to_string(),
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_string(),
    }
}
