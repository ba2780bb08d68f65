use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume file uploaded")]
    MissingFile,

    #[error("No job description provided")]
    MissingJobDescription,

    #[error("No selected file")]
    EmptyFilename,

    #[error("Invalid file type")]
    UnsupportedFormat,

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Upload exceeds the {0} byte limit")]
    PayloadTooLarge(usize),

    #[error("Failed to extract resume text: {0}")]
    ExtractionFailed(#[from] ExtractError),

    #[error("Analysis service error: {0}")]
    AnalysisService(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFile
            | AppError::MissingJobDescription
            | AppError::EmptyFilename
            | AppError::UnsupportedFormat
            | AppError::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ExtractionFailed(_)
            | AppError::AnalysisService(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let AppError::Internal(e) = &self {
            tracing::error!("Internal error: {e:?}");
        } else if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("Rejected request: {self}");
        }

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
