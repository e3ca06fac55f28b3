use std::path::Path;

use super::ExtractorError;

/// Extracted text of every page, concatenated in page order.
pub(super) fn extract_text(path: &Path) -> Result<String, ExtractorError> {
    pdf_extract::extract_text(path).map_err(|e| ExtractorError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
