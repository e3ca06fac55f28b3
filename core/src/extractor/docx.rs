use std::path::Path;

use super::ExtractorError;

/// Text of every paragraph, in document order. Paragraphs are separated by a
/// blank line so the chunker sees them as distinct chunks; empty paragraphs
/// are skipped. Tables and other non-paragraph elements are ignored.
pub(super) fn extract_text(path: &Path) -> Result<String, ExtractorError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractorError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let docx = docx_rs::read_docx(&bytes).map_err(|e| ExtractorError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut text = String::new();
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n\n"))
}
