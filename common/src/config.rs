//! Application configuration.
//!
//! `AppConfig` holds every runtime setting of the grading service. It is loaded once at
//! startup from `.env` and the process environment and then passed explicitly to
//! whatever needs it; nothing reads the environment after that.

use std::collections::HashMap;
use std::env;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    /// Empty when unset; the service then refuses grading requests.
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub grading_timeout_secs: u64,
    pub grading_pacing_ms: u64,
    pub grading_fallback_score: f64,
    pub reveal_reference_on_blank: bool,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        Ok(Self {
            project_name: text("PROJECT_NAME", "exam-grader"),
            log_level: text("LOG_LEVEL", "api=info,grader=info"),
            log_file: text("LOG_FILE", "api.log"),
            log_to_stdout: parse_bool(&lookup, "LOG_TO_STDOUT", false)?,
            host: text("HOST", "127.0.0.1"),
            port: parse(&lookup, "PORT", 3000, "a port number")?,
            gemini_api_key: text("GEMINI_API_KEY", ""),
            gemini_model: text("GEMINI_MODEL", "gemini-3-flash-preview"),
            gemini_base_url: text(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com/v1beta",
            ),
            grading_timeout_secs: parse(&lookup, "GRADING_TIMEOUT_SECS", 30, "whole seconds")?,
            grading_pacing_ms: parse(&lookup, "GRADING_PACING_MS", 300, "whole milliseconds")?,
            grading_fallback_score: parse(&lookup, "GRADING_FALLBACK_SCORE", 0.0, "a number")?,
            reveal_reference_on_blank: parse_bool(&lookup, "REVEAL_REFERENCE_ON_BLANK", true)?,
        })
    }

    /// Same as [`AppConfig::from_lookup`] over a fixed map. Handy in tests.
    pub fn from_map(values: &HashMap<&str, &str>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| values.get(key).map(|v| v.to_string()))
    }

    pub fn has_gemini_api_key(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T, expected: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key,
            value: raw,
            expected,
        }),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                key,
                value: raw,
                expected: "true or false",
            }),
        },
    }
}
