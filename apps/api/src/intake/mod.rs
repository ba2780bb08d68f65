//! File Intake — validates a résumé submission before anything touches disk.
//!
//! Validation order matters: a request missing both the file and the job
//! description is reported as a missing file.

pub mod upload;

use bytes::Bytes;

use crate::errors::AppError;

pub use upload::TempUpload;

/// Supported résumé formats. Anything else is rejected at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    /// Detects the format from the text after the last `.`, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(ResumeFormat::Pdf),
            "docx" => Some(ResumeFormat::Docx),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "pdf",
            ResumeFormat::Docx => "docx",
        }
    }
}

/// A file part as received from the client.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

/// Raw form contents of a `POST /analyze` request.
#[derive(Debug, Default)]
pub struct ResumeSubmission {
    pub resume: Option<UploadedFile>,
    pub job_description: Option<String>,
}

/// A submission that passed intake validation.
#[derive(Debug)]
pub struct ValidatedSubmission {
    pub document: UploadedDocument,
    pub job_description: String,
}

#[derive(Debug)]
pub struct UploadedDocument {
    pub original_name: String,
    pub data: Bytes,
    pub format: ResumeFormat,
}

impl UploadedDocument {
    pub fn sanitized_name(&self) -> String {
        sanitize_file_name(&self.original_name)
    }
}

/// Checks presence and extension of the submitted fields. Performs no I/O.
pub fn validate_submission(submission: ResumeSubmission) -> Result<ValidatedSubmission, AppError> {
    let resume = submission.resume.ok_or(AppError::MissingFile)?;

    let job_description = submission
        .job_description
        .filter(|jd| !jd.is_empty())
        .ok_or(AppError::MissingJobDescription)?;

    if resume.file_name.is_empty() {
        return Err(AppError::EmptyFilename);
    }

    let format =
        ResumeFormat::from_file_name(&resume.file_name).ok_or(AppError::UnsupportedFormat)?;

    Ok(ValidatedSubmission {
        document: UploadedDocument {
            original_name: resume.file_name,
            data: resume.data,
            format,
        },
        job_description,
    })
}

/// Reduces a client-supplied file name to a safe, flat ASCII name.
///
/// Path separators become spaces, whitespace runs collapse to `_`, anything
/// outside `[A-Za-z0-9_.-]` is dropped, and leading/trailing `.`/`_` are
/// trimmed so the result can never climb out of the upload directory.
pub fn sanitize_file_name(file_name: &str) -> String {
    let flattened = file_name.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}
