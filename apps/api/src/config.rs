use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub upload_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub limits: PromptLimits,
    pub llm_timeout: Duration,
    pub max_concurrent_requests: usize,
}

/// Upper bounds on the text forwarded to the model, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptLimits {
    pub max_resume_chars: usize,
    pub max_job_description_chars: usize,
}

impl Default for PromptLimits {
    fn default() -> Self {
        Self {
            max_resume_chars: 50_000,
            max_job_description_chars: 20_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let google_api_key = lookup("GOOGLE_API_KEY")
            .context("Required environment variable 'GOOGLE_API_KEY' is not set")?;
        if google_api_key.trim().is_empty() {
            bail!("Required environment variable 'GOOGLE_API_KEY' is empty");
        }

        let defaults = PromptLimits::default();

        Ok(Config {
            google_api_key,
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: lookup("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            port: parse_or(&lookup, "PORT", 5000)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            limits: PromptLimits {
                max_resume_chars: parse_or(&lookup, "MAX_RESUME_CHARS", defaults.max_resume_chars)?,
                max_job_description_chars: parse_or(
                    &lookup,
                    "MAX_JOB_DESCRIPTION_CHARS",
                    defaults.max_job_description_chars,
                )?,
            },
            llm_timeout: Duration::from_secs(parse_or(&lookup, "LLM_TIMEOUT_SECS", 60)?),
            max_concurrent_requests: parse_or(&lookup, "MAX_CONCURRENT_REQUESTS", 16)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
