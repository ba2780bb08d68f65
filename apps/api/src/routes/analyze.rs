use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::analysis::analyze_submission;
use crate::errors::AppError;
use crate::intake::{ResumeSubmission, UploadedFile};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// POST /analyze
///
/// Multipart form: `resume` (PDF or DOCX file) and `jobDescription` (text).
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    // A body that is not multipart cannot carry a file part.
    let multipart = multipart.map_err(|_| AppError::MissingFile)?;

    let submission = read_submission(multipart, state.config.max_upload_bytes).await?;
    let analysis = analyze_submission(&state, submission).await?;

    Ok(Json(AnalyzeResponse { analysis }))
}

/// Collects the two known fields; unknown fields are skipped.
/// A `resume` part without a filename is a plain form value, not a file.
async fn read_submission(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> Result<ResumeSubmission, AppError> {
    let mut submission = ResumeSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, max_upload_bytes))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) if submission.resume.is_none() => {
                let Some(file_name) = field.file_name().map(str::to_owned) else {
                    continue;
                };
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| upload_error(e, max_upload_bytes))?;
                submission.resume = Some(UploadedFile { file_name, data });
            }
            Some(JOB_DESCRIPTION_FIELD) if submission.job_description.is_none() => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| upload_error(e, max_upload_bytes))?;
                submission.job_description = Some(text);
            }
            _ => {}
        }
    }

    Ok(submission)
}

fn upload_error(e: MultipartError, max_upload_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(max_upload_bytes)
    } else {
        AppError::InvalidUpload(e.body_text())
    }
}
