//! Shared helpers for pipeline and router tests.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request},
};

use crate::config::{Config, PromptLimits};
use crate::llm_client::{AnalysisClient, LlmError};
use crate::state::AppState;

/// Scripted model backend that records every prompt it receives.
#[derive(Clone)]
pub struct FakeAnalysisClient {
    reply: Result<String, String>,
    watch_dir: Option<PathBuf>,
    delay: Duration,
    prompts: Arc<Mutex<Vec<String>>>,
    files_seen: Arc<Mutex<Vec<usize>>>,
    in_flight: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
}

impl FakeAnalysisClient {
    pub fn replying(text: &str) -> Self {
        Self::new(Ok(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Err(message.to_string()))
    }

    fn new(reply: Result<String, String>) -> Self {
        Self {
            reply,
            watch_dir: None,
            delay: Duration::ZERO,
            prompts: Arc::default(),
            files_seen: Arc::default(),
            in_flight: Arc::default(),
            peak_in_flight: Arc::default(),
        }
    }

    /// Holds every call open for `delay` before replying.
    pub fn delaying(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Records how many files `dir` holds at the moment of each call.
    pub fn watching(mut self, dir: &Path) -> Self {
        self.watch_dir = Some(dir.to_path_buf());
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn files_seen_at_call(&self) -> Vec<usize> {
        self.files_seen.lock().unwrap().clone()
    }

    /// Highest number of `generate` calls that were running at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisClient for FakeAnalysisClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(dir) = &self.watch_dir {
            self.files_seen.lock().unwrap().push(file_count(dir));
        }

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(running, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.reply.clone().map_err(|message| LlmError::Api {
            status: 503,
            message,
        })
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}

pub fn test_config(upload_dir: &Path) -> Config {
    Config {
        google_api_key: "test-key".to_string(),
        gemini_model: "fake-model".to_string(),
        gemini_api_base: "http://127.0.0.1:9".to_string(),
        upload_dir: upload_dir.to_path_buf(),
        port: 0,
        rust_log: "debug".to_string(),
        max_upload_bytes: 1024 * 1024,
        limits: PromptLimits::default(),
        llm_timeout: Duration::from_secs(5),
        max_concurrent_requests: 4,
    }
}

pub fn test_state(upload_dir: &Path, client: FakeAnalysisClient) -> AppState {
    AppState {
        llm: Arc::new(client),
        config: test_config(upload_dir),
    }
}

pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

const BOUNDARY: &str = "----resume-test-boundary";

/// A well-formed `POST /analyze` request with a `resume` file and a `jobDescription`.
pub fn analyze_request(file_name: &str, data: &[u8], job_description: &str) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(
        format!(
            "\r\n--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"jobDescription\"\r\n\r\n\
             {job_description}\r\n\
             --{BOUNDARY}--\r\n"
        )
        .as_bytes(),
    );

    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
