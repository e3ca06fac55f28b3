use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Source format of a document, resolved once from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Maps a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// A source document with its extracted plain text. The text is immutable
/// once extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub text: String,
}

impl Document {
    /// The bare file name, used as the `file_name` column of stored rows.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// A contiguous, non-empty text segment of a document, with its 0-based
/// position in the chunk sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub index: usize,
}

/// The persisted tuple: one row per chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkRecord {
    pub chunk_text: String,
    pub embedding: Vec<f64>,
    pub file_name: String,
    pub chunk_index: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension("txt"), None);
        assert_eq!(DocumentFormat::from_extension(""), None);
    }

    #[test]
    fn file_name_of_nested_path() {
        let doc = Document {
            path: PathBuf::from("/tmp/data/report.pdf"),
            format: DocumentFormat::Pdf,
            text: String::new(),
        };
        assert_eq!(doc.file_name(), "report.pdf");
    }
}
