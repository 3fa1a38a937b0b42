//! # Grader Library
//!
//! This crate scores free-text exam answers with an external LLM grading service.
//! It takes an ordered batch of (question, student answer, reference answer) items,
//! grades them one at a time, and returns an [`EvaluationReport`] with one record per
//! item plus total and average scores.
//!
//! ## Key Concepts
//! - **ExamJob**: the batch orchestrator for one exam submission.
//! - **Evaluator**: grades a single answer and never fails; see [`evaluator`].
//! - **GradingClient**: transport to the grading service; see [`client::gemini`].
//! - **ResponseParser**: tolerant extraction of the JSON verdict from model text.
//! - **Pacing**: policy consulted between external calls; see [`pacing`].
//! - **Reports**: records and exam-level statistics; see [`report`] and [`scorer`].

pub mod client;
pub mod error;
pub mod evaluator;
pub mod pacing;
pub mod parsers;
pub mod prompt;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;

use crate::evaluator::{Evaluator, EvaluatorSettings};
use crate::pacing::fixed_delay::FixedDelay;
use crate::report::EvaluationReport;
use crate::traits::grading_client::GradingClient;
use crate::traits::pacing::Pacing;
use crate::types::AnswerItem;

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Grades one exam submission.
///
/// Items are processed strictly in input order, one external call at a time. Before
/// every external call except the first, the configured [`Pacing`] policy is
/// consulted. Blank answers are scored without a call and therefore without a pause.
///
/// # Example
///
/// ```rust,no_run
/// use grader::ExamJob;
/// use grader::client::gemini::{GeminiClient, GeminiConfig};
/// use grader::types::AnswerItem;
/// use std::sync::Arc;
///
/// # async fn run() -> Result<(), grader::error::TransportError> {
/// let client = GeminiClient::new(GeminiConfig::new("api-key"))?;
/// let job = ExamJob::new(Arc::new(client));
/// let report = job
///     .evaluate_batch(&[AnswerItem::new(1, "¿Qué es la demanda?", "...", "...")])
///     .await;
/// println!("{}", report.average_score);
/// # Ok(())
/// # }
/// ```
pub struct ExamJob {
    evaluator: Evaluator,
    pacing: Box<dyn Pacing>,
}

impl ExamJob {
    /// Create a job with default evaluator settings and a 300 ms fixed delay.
    pub fn new(client: Arc<dyn GradingClient>) -> Self {
        Self {
            evaluator: Evaluator::new(client),
            pacing: Box::new(FixedDelay::default()),
        }
    }

    pub fn with_settings(mut self, settings: EvaluatorSettings) -> Self {
        self.evaluator = self.evaluator.with_settings(settings);
        self
    }

    /// Set the policy consulted between external calls.
    pub fn with_pacing<P: Pacing + 'static>(mut self, pacing: P) -> Self {
        self.pacing = Box::new(pacing);
        self
    }

    /// Attach study material that every grading prompt of this job will include.
    pub fn with_reference_material(mut self, material: impl Into<String>) -> Self {
        self.evaluator = self.evaluator.with_reference_material(material);
        self
    }

    /// Grade every item and aggregate the results.
    ///
    /// An empty slice yields an empty report with zero scores.
    pub async fn evaluate_batch(&self, items: &[AnswerItem]) -> EvaluationReport {
        self.evaluate_batch_until(items, &CancellationToken::new())
            .await
    }

    /// Like [`ExamJob::evaluate_batch`], stopping early once `cancel` fires.
    ///
    /// The token is checked between items and during pacing pauses, never while a
    /// grading call is in flight. A cancelled batch returns the records produced so far
    /// with `cancelled` set.
    pub async fn evaluate_batch_until(
        &self,
        items: &[AnswerItem],
        cancel: &CancellationToken,
    ) -> EvaluationReport {
        tracing::info!(items = items.len(), "evaluating exam batch");

        let mut evaluations = Vec::with_capacity(items.len());
        let mut calls_made = 0usize;
        let mut cancelled = false;

        for item in items {
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            let needs_call = !item.is_unanswered();
            if needs_call && calls_made > 0 {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        cancelled = true;
                        break;
                    }
                    _ = self.pacing.pause(calls_made) => {}
                }
            }

            let record = self.evaluator.evaluate(item).await;
            if needs_call {
                calls_made += 1;
            }
            tracing::debug!(
                question_id = record.question_id,
                score = record.score,
                status = ?record.status,
                "answer evaluated"
            );
            evaluations.push(record);
        }

        if cancelled {
            tracing::info!(
                processed = evaluations.len(),
                total = items.len(),
                "exam batch cancelled"
            );
        }

        let report = EvaluationReport::from_records(evaluations, cancelled);
        tracing::info!(
            total_score = report.total_score,
            average_score = report.average_score,
            "exam batch evaluated"
        );
        report
    }
}
