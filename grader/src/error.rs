//! Grader Error Types
//!
//! This module defines the errors that can occur while grading a single answer:
//!
//! - [`TransportError`]: the grading service could not be reached, answered with a
//!   non-success status, timed out, or sent back an envelope that does not decode.
//! - [`ParseError`]: the service answered, but its text could not be read as an
//!   evaluation record.
//! - [`GraderError`]: the umbrella type used inside the evaluator so both failure
//!   kinds can flow through `?`.
//!
//! None of these ever reach the caller of a batch: the evaluator turns them into a
//! fallback record and logs them.
//!
//! # Example
//!
//! ```rust
//! use grader::error::{GraderError, ParseError};
//!
//! fn classify(err: &GraderError) -> &'static str {
//!     match err {
//!         GraderError::Transport(_) => "transport",
//!         GraderError::Parse(_) => "parse",
//!     }
//! }
//!
//! assert_eq!(classify(&ParseError::NoJsonObject.into()), "parse");
//! ```

use std::time::Duration;

/// Failure talking to the grading service.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or body-read failure.
    #[error("request to grading service failed: {0}")]
    Network(String),
    /// The call did not complete within the configured timeout.
    #[error("grading service did not answer within {0:?}")]
    Timeout(Duration),
    /// The service answered with a non-2xx status.
    #[error("grading service returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The body was not a `generateContent` response envelope.
    #[error("error decoding response body: {reason}. Full response: {body}")]
    MalformedEnvelope { reason: String, body: String },
}

/// The model's text could not be interpreted as an evaluation.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no JSON object found in model output")]
    NoJsonObject,
    #[error("invalid JSON in model output: {0}")]
    InvalidJson(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GraderError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
