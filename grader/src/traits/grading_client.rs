//! # Grading Client Trait
//!
//! A [`GradingClient`] sends one combined prompt to the external grading service and
//! hands back the raw model text. It performs no retries and holds no per-call state,
//! so one instance is shared by every evaluation of every batch.

use crate::error::TransportError;
use async_trait::async_trait;

/// Transport to the grading service.
///
/// # Returns
/// - `Ok(String)`: the first candidate's text, or an empty string when the service
///   produced no candidate.
/// - `Err(TransportError)`: network failure, timeout, non-2xx status or a malformed
///   envelope.
#[async_trait]
pub trait GradingClient: Send + Sync {
    async fn grade(&self, system_prompt: &str, task_prompt: &str)
    -> Result<String, TransportError>;
}

