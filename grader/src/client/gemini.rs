//! # Gemini Grading Client
//!
//! [`GeminiClient`] implements [`GradingClient`] on top of Gemini's `generateContent`
//! REST endpoint.
//!
//! ## Request
//!
//! The system instruction and the task prompt are joined with a blank line and sent as
//! a single text part, with a fixed low-temperature [`GenerationConfig`] so repeated
//! gradings of the same answer stay consistent. The API key travels as the `key`
//! query parameter.
//!
//! ## Response
//!
//! The envelope is decoded into a schema whose every level is optional and then
//! collapsed into a [`CandidateText`]: either the first candidate's first text part or
//! `Absent`. An absent candidate is an empty string, not an error.
//!
//! ## Failures
//!
//! Every failure is a [`TransportError`]; the client never retries.

use crate::error::TransportError;
use crate::traits::grading_client::GradingClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

/// Everything the client needs to reach the service.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL without a trailing `/models` segment.
    pub base_url: String,
    /// Upper bound for one call, connection through body.
    pub timeout: Duration,
    pub generation: GenerationConfig,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            generation: GenerationConfig::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `{base_url}/models/{model}:generateContent`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Response envelope. Every level may be missing.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// The useful part of a decoded envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateText {
    Text(String),
    Absent,
}

impl CandidateText {
    pub fn into_string(self) -> String {
        match self {
            CandidateText::Text(text) => text,
            CandidateText::Absent => String::new(),
        }
    }
}

impl GenerateContentResponse {
    fn first_text(self) -> CandidateText {
        self.candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts)
            .and_then(|parts| parts.into_iter().next())
            .and_then(|part| part.text)
            .map_or(CandidateText::Absent, CandidateText::Text)
    }
}

/// Decodes a `generateContent` body into its first candidate text.
pub fn decode_envelope(body: &str) -> Result<CandidateText, TransportError> {
    serde_json::from_str::<GenerateContentResponse>(body)
        .map(GenerateContentResponse::first_text)
        .map_err(|e| TransportError::MalformedEnvelope {
            reason: e.to_string(),
            body: body.to_string(),
        })
}

/// Gemini-backed [`GradingClient`].
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Builds the underlying HTTP client with the configured per-call timeout.
    pub fn new(config: GeminiConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn transport_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout(self.config.timeout)
        } else {
            TransportError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl GradingClient for GeminiClient {
    async fn grade(
        &self,
        system_prompt: &str,
        task_prompt: &str,
    ) -> Result<String, TransportError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("{system_prompt}\n\n{task_prompt}"),
                }],
            }],
            generation_config: self.config.generation,
        };

        let response = self
            .http
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let text = decode_envelope(&response_text)?;
        if text == CandidateText::Absent {
            tracing::debug!(model = %self.config.model, "grading service returned no candidate text");
        }
        Ok(text.into_string())
    }
}
