//! Request Pipeline — intake, extraction, prompt, model call.
//!
//! A failure at any stage short-circuits the rest; nothing partial is returned.

pub mod prompts;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, ExtractError};
use crate::intake::{
    validate_submission, ResumeFormat, ResumeSubmission, TempUpload, UploadedDocument,
};
use crate::state::AppState;

use self::prompts::build_analysis_prompt;

type Extractor = fn(ResumeFormat, &Path) -> Result<String, ExtractError>;

/// Runs the whole pipeline for one submission and returns the model's text verbatim.
pub async fn analyze_submission(
    state: &AppState,
    submission: ResumeSubmission,
) -> Result<String, AppError> {
    let validated = validate_submission(submission)?;

    info!(
        "Analyzing resume '{}' ({:?}, {} bytes)",
        validated.document.original_name,
        validated.document.format,
        validated.document.data.len()
    );

    let resume_text = extract_resume(
        state.config.upload_dir.clone(),
        validated.document,
        extract_text,
    )
    .await?;
    info!("Extracted {} characters of resume text", resume_text.chars().count());

    let prompt = build_analysis_prompt(
        &resume_text,
        &validated.job_description,
        &state.config.limits,
    );

    let analysis = state.llm.generate(&prompt).await?;
    info!(
        "Received analysis from {} ({} characters)",
        state.llm.model(),
        analysis.chars().count()
    );

    Ok(analysis)
}

/// Persists the upload, extracts its text, and deletes the file before returning.
///
/// Runs on the blocking pool. The temp file is owned by the closure, so it is
/// released on success, on error, and when an extractor panics.
async fn extract_resume(
    upload_dir: PathBuf,
    document: UploadedDocument,
    extractor: Extractor,
) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let upload = TempUpload::persist(&upload_dir, &document).with_context(|| {
            format!("Failed to store upload in {}", upload_dir.display())
        })?;

        let extracted = extractor(upload.format(), upload.path());
        upload.release();

        Ok(extracted?)
    })
    .await
    .map_err(|e| AppError::ExtractionFailed(ExtractError::Aborted(e.to_string())))?
}
