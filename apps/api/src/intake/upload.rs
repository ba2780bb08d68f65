use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{ResumeFormat, UploadedDocument};

/// A résumé persisted to the upload directory for the duration of one request.
///
/// The file is removed when the guard is dropped, on every exit path,
/// including unwinding out of a panicking extractor.
#[derive(Debug)]
pub struct TempUpload {
    file: NamedTempFile,
    format: ResumeFormat,
}

impl TempUpload {
    /// Writes the document into `dir` under a unique name derived from the
    /// sanitized original file name.
    pub fn persist(dir: &Path, document: &UploadedDocument) -> std::io::Result<Self> {
        let sanitized = document.sanitized_name();
        let extension = document.format.extension();
        let suffix = if sanitized.is_empty() {
            format!(".{extension}")
        } else if sanitized.to_ascii_lowercase().ends_with(&format!(".{extension}")) {
            format!("-{sanitized}")
        } else {
            format!("-{sanitized}.{extension}")
        };

        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(&suffix)
            .tempfile_in(dir)?;
        file.write_all(&document.data)?;
        file.flush()?;

        debug!(
            "Persisted upload '{}' ({} bytes) to {}",
            document.original_name,
            document.data.len(),
            file.path().display()
        );

        Ok(Self {
            file,
            format: document.format,
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn format(&self) -> ResumeFormat {
        self.format
    }

    /// Deletes the file now, logging instead of failing if removal errors.
    pub fn release(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!("Failed to delete temporary upload {}: {e}", path.display());
        }
    }
}
