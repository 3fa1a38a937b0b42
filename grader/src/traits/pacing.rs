//! # Pacing Trait
//!
//! The batch orchestrator consults a [`Pacing`] policy before every external grading
//! call except the first of a batch. Implementations decide the delay; the
//! orchestrator only decides *when* to ask.

use async_trait::async_trait;

#[async_trait]
pub trait Pacing: Send + Sync {
    /// Waits before the next external call.
    ///
    /// `calls_made` is the number of external calls already issued in the current
    /// batch and is always at least 1.
    async fn pause(&self, calls_made: usize);
}
