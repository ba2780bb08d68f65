//! Text Extractor — turns a persisted résumé into plain text in reading order.
//!
//! Both extractors are synchronous and CPU-bound; callers run them on the
//! blocking pool.

pub mod docx;
pub mod pdf;

#[cfg(test)]
pub mod fixtures;

use std::path::Path;

use thiserror::Error;

use crate::intake::ResumeFormat;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("DOCX archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("DOCX archive has no word/document.xml")]
    MissingDocumentXml,

    #[error("DOCX XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Extractor aborted: {0}")]
    Aborted(String),
}

/// Extracts the full text of the document at `path`.
pub fn extract_text(format: ResumeFormat, path: &Path) -> Result<String, ExtractError> {
    match format {
        ResumeFormat::Pdf => pdf::extract_pdf_text(path),
        ResumeFormat::Docx => docx::extract_docx_text(path),
    }
}
