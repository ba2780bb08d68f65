use std::path::Path;

use tracing::debug;

use super::ExtractError;

/// Concatenates the text of every page in page order.
/// Pages without a text layer contribute nothing rather than failing.
pub fn extract_pdf_text(path: &Path) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_by_pages(path)?;

    debug!("Extracted {} PDF page(s) from {}", pages.len(), path.display());

    Ok(pages.concat())
}
