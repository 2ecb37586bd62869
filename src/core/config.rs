use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::SummarizerError;

pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.together.xyz/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo";
pub const DEFAULT_COMPLETION_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TRANSCRIPT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TRANSCRIPT_LANGUAGES: &str = "en";
pub const DEFAULT_SERVER_PORT: u16 = 8888;

/// Loads a `.env` file into the process environment, overriding variables
/// that are already set. Without `path` the file is searched for from the
/// working directory upwards. Returns the file that was loaded, if any.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenvy::from_path_override(path)
            .ok()
            .map(|()| path.to_path_buf()),
        None => dotenvy::dotenv_override().ok(),
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub completion_api_key: String,
    pub completion_base_url: String,
    pub completion_model: String,
    pub completion_max_tokens: u32,
    pub completion_timeout: Duration,
    pub transcript_timeout: Duration,
    pub transcript_languages: Vec<String>,
    pub server_port: u16,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::ConfigError`] when `TOGETHER_API_KEY` is missing
    /// or blank, or when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, SummarizerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let completion_api_key = get("TOGETHER_API_KEY").ok_or_else(|| {
            SummarizerError::ConfigError("TOGETHER_API_KEY: environment variable not set".into())
        })?;

        let completion_max_tokens = parse_or(
            "COMPLETION_MAX_TOKENS",
            get("COMPLETION_MAX_TOKENS"),
            DEFAULT_COMPLETION_MAX_TOKENS,
        )?;
        let completion_timeout_secs = parse_or(
            "COMPLETION_TIMEOUT_SECS",
            get("COMPLETION_TIMEOUT_SECS"),
            DEFAULT_COMPLETION_TIMEOUT_SECS,
        )?;
        let transcript_timeout_secs = parse_or(
            "TRANSCRIPT_TIMEOUT_SECS",
            get("TRANSCRIPT_TIMEOUT_SECS"),
            DEFAULT_TRANSCRIPT_TIMEOUT_SECS,
        )?;
        let server_port = parse_or("SERVER_PORT", get("SERVER_PORT"), DEFAULT_SERVER_PORT)?;

        let languages_raw =
            get("TRANSCRIPT_LANGUAGES").unwrap_or_else(|| DEFAULT_TRANSCRIPT_LANGUAGES.to_string());
        let mut transcript_languages: Vec<String> = languages_raw
            .split(',')
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        if transcript_languages.is_empty() {
            transcript_languages.push(DEFAULT_TRANSCRIPT_LANGUAGES.to_string());
        }

        Ok(Self {
            completion_api_key,
            completion_base_url: get("COMPLETION_BASE_URL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_BASE_URL.to_string()),
            completion_model: get("COMPLETION_MODEL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
            completion_max_tokens,
            completion_timeout: Duration::from_secs(completion_timeout_secs),
            transcript_timeout: Duration::from_secs(transcript_timeout_secs),
            transcript_languages,
            server_port,
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T, SummarizerError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value
            .parse::<T>()
            .map_err(|e| SummarizerError::ConfigError(format!("{key}: {e}"))),
        None => Ok(default),
    }
}
