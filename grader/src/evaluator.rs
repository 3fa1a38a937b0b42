//! # Per-Answer Evaluator
//!
//! [`Evaluator::evaluate`] turns one [`AnswerItem`] into one [`EvaluationRecord`] and
//! never fails:
//!
//! - A blank answer is scored 0 without calling the grading service.
//! - Otherwise the prompt is sent through the [`GradingClient`], the reply goes through
//!   the [`ResponseParser`], and the score is clamped to `[0, 10]` with one decimal.
//! - Any transport or parse failure is logged and replaced by a fallback record.

use crate::error::GraderError;
use crate::parsers::response_parser::ResponseParser;
use crate::prompt::{self, SYSTEM_PROMPT};
use crate::traits::grading_client::GradingClient;
use crate::traits::parser::Parser;
use crate::types::{AnswerItem, EvaluationFields, EvaluationRecord, EvaluationStatus};
use crate::utilities::score_normalization::normalize_score;
use std::sync::Arc;

pub const UNANSWERED_STRENGTHS: &str = "No se proporcionó respuesta.";
pub const UNANSWERED_IMPROVEMENTS: &str = "Debes responder la pregunta. Estudia la respuesta modelo para comprender los conceptos clave que debes incluir.";
pub const UNANSWERED_FEEDBACK: &str = "No respondiste esta pregunta.";

pub const FAILED_STRENGTHS: &str = "Error al evaluar.";
pub const FAILED_IMPROVEMENTS: &str = "Error técnico.";
pub const FAILED_FEEDBACK: &str = "Hubo un error al evaluar esta respuesta.";

/// Tunables for records the evaluator produces without a model score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatorSettings {
    /// Score given when grading fails. Normalized like any other score.
    pub fallback_score: f64,
    /// Whether the feedback of a blank answer quotes the reference answer.
    pub reveal_reference_on_blank: bool,
}

impl Default for EvaluatorSettings {
    fn default() -> Self {
        Self {
            fallback_score: 0.0,
            reveal_reference_on_blank: true,
        }
    }
}

pub struct Evaluator {
    client: Arc<dyn GradingClient>,
    settings: EvaluatorSettings,
    reference_material: Option<String>,
}

impl Evaluator {
    pub fn new(client: Arc<dyn GradingClient>) -> Self {
        Self {
            client,
            settings: EvaluatorSettings::default(),
            reference_material: None,
        }
    }

    pub fn with_settings(mut self, settings: EvaluatorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Study text embedded in every task prompt.
    pub fn with_reference_material(mut self, material: impl Into<String>) -> Self {
        self.reference_material = Some(material.into());
        self
    }

    /// Grades one answer. Always returns a record.
    pub async fn evaluate(&self, item: &AnswerItem) -> EvaluationRecord {
        if item.is_unanswered() {
            tracing::debug!(question_id = item.question_id, "blank answer, skipping grading call");
            return self.unanswered_record(item);
        }

        match self.grade(item).await {
            Ok(fields) => EvaluationRecord::for_item(
                item,
                normalize_score(fields.score),
                fields.strengths,
                fields.improvements,
                fields.feedback,
                EvaluationStatus::Graded,
            ),
            Err(e) => {
                tracing::warn!(
                    question_id = item.question_id,
                    error = %e,
                    "grading failed, using fallback record"
                );
                self.failed_record(item)
            }
        }
    }

    async fn grade(&self, item: &AnswerItem) -> Result<EvaluationFields, GraderError> {
        let task_prompt = prompt::task_prompt(item, self.reference_material.as_deref());
        let raw = self.client.grade(SYSTEM_PROMPT, &task_prompt).await?;
        let fields = ResponseParser.parse(raw.as_str())?;
        Ok(fields)
    }

    fn unanswered_record(&self, item: &AnswerItem) -> EvaluationRecord {
        let feedback = if self.settings.reveal_reference_on_blank {
            format!(
                "{UNANSWERED_FEEDBACK}\n\n📚 Respuesta modelo:\n\"{}\"",
                item.reference_answer
            )
        } else {
            UNANSWERED_FEEDBACK.to_string()
        };

        EvaluationRecord::for_item(
            item,
            0.0,
            UNANSWERED_STRENGTHS.to_string(),
            UNANSWERED_IMPROVEMENTS.to_string(),
            feedback,
            EvaluationStatus::Unanswered,
        )
    }

    fn failed_record(&self, item: &AnswerItem) -> EvaluationRecord {
        EvaluationRecord::for_item(
            item,
            normalize_score(self.settings.fallback_score),
            FAILED_STRENGTHS.to_string(),
            FAILED_IMPROVEMENTS.to_string(),
            FAILED_FEEDBACK.to_string(),
            EvaluationStatus::Failed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replies with the same canned result to every call.
    struct CannedClient {
        reply: Result<String, u16>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl CannedClient {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            })
        }

        fn status(code: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(code),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl GradingClient for CannedClient {
        async fn grade(
            &self,
            _system_prompt: &str,
            task_prompt: &str,
        ) -> Result<String, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(task_prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(TransportError::Status {
                    status: *status,
                    body: "quota exceeded".to_string(),
                }),
            }
        }
    }

    fn item(answer: &str) -> AnswerItem {
        AnswerItem::new(
            11,
            "¿Qué es la rebeldía procesal?",
            answer,
            "Situación del demandado que no comparece.",
        )
    }

    #[tokio::test]
    async fn test_graded_record() {
        let client = CannedClient::ok(
            r#"{"score": 7.84, "strengths": "s", "improvements": "i", "feedback": "f"}"#,
        );
        let evaluator = Evaluator::new(client.clone());
        let record = evaluator.evaluate(&item("El demandado no comparece.")).await;

        assert_eq!(record.status, EvaluationStatus::Graded);
        assert_eq!(record.score, 7.8);
        assert_eq!(record.strengths, "s");
        assert_eq!(record.question_id, 11);
        assert_eq!(record.student_answer, "El demandado no comparece.");
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_out_of_range_scores_are_clamped() {
        for (reply, expected) in [
            (r#"{"score": 14}"#, 10.0),
            (r#"{"score": -2.5}"#, 0.0),
            (r#"{"score": "nueve"}"#, 0.0),
            (r#"{"feedback": "sin nota"}"#, 0.0),
            (r#"{"score": "9.96"}"#, 10.0),
        ] {
            let evaluator = Evaluator::new(CannedClient::ok(reply));
            let record = evaluator.evaluate(&item("respuesta")).await;
            assert_eq!(record.score, expected, "{reply}");
            assert_eq!(record.status, EvaluationStatus::Graded);
        }
    }

    #[tokio::test]
    async fn test_blank_answer_short_circuits() {
        let client = CannedClient::ok(r#"{"score": 10}"#);
        let evaluator = Evaluator::new(client.clone());

        for answer in ["", "   \n\t"] {
            let record = evaluator.evaluate(&item(answer)).await;
            assert_eq!(record.score, 0.0);
            assert_eq!(record.status, EvaluationStatus::Unanswered);
            assert_eq!(record.strengths, UNANSWERED_STRENGTHS);
            assert_eq!(record.improvements, UNANSWERED_IMPROVEMENTS);
            assert!(record.feedback.starts_with(UNANSWERED_FEEDBACK));
            assert!(
                record
                    .feedback
                    .contains("\"Situación del demandado que no comparece.\"")
            );
        }
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_answer_can_hide_reference() {
        let evaluator = Evaluator::new(CannedClient::ok("{}")).with_settings(EvaluatorSettings {
            reveal_reference_on_blank: false,
            ..EvaluatorSettings::default()
        });
        let record = evaluator.evaluate(&item("")).await;
        assert_eq!(record.feedback, UNANSWERED_FEEDBACK);
        assert!(!record.feedback.contains("no comparece"));
    }

    #[tokio::test]
    async fn test_transport_failure_yields_fallback() {
        let client = CannedClient::status(429);
        let evaluator = Evaluator::new(client.clone());
        let record = evaluator.evaluate(&item("respuesta")).await;

        assert_eq!(record.status, EvaluationStatus::Failed);
        assert_eq!(record.score, 0.0);
        assert_eq!(record.strengths, FAILED_STRENGTHS);
        assert_eq!(record.improvements, FAILED_IMPROVEMENTS);
        assert_eq!(record.feedback, FAILED_FEEDBACK);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_parse_failure_yields_fallback_with_configured_score() {
        let evaluator = Evaluator::new(CannedClient::ok("No puedo evaluar esto."))
            .with_settings(EvaluatorSettings {
                fallback_score: 5.0,
                ..EvaluatorSettings::default()
            });
        let record = evaluator.evaluate(&item("respuesta")).await;
        assert_eq!(record.status, EvaluationStatus::Failed);
        assert_eq!(record.score, 5.0);
    }

    #[tokio::test]
    async fn test_empty_model_text_yields_fallback() {
        let evaluator = Evaluator::new(CannedClient::ok(""));
        let record = evaluator.evaluate(&item("respuesta")).await;
        assert_eq!(record.status, EvaluationStatus::Failed);
    }

    #[tokio::test]
    async fn test_fallback_score_is_normalized() {
        let evaluator = Evaluator::new(CannedClient::status(500)).with_settings(EvaluatorSettings {
            fallback_score: 42.0,
            ..EvaluatorSettings::default()
        });
        let record = evaluator.evaluate(&item("respuesta")).await;
        assert_eq!(record.score, 10.0);
    }

    #[tokio::test]
    async fn test_reference_material_reaches_prompt() {
        let client = CannedClient::ok(r#"{"score": 5}"#);
        let evaluator =
            Evaluator::new(client.clone()).with_reference_material("Ley 1/2000 de Enjuiciamiento Civil");
        evaluator.evaluate(&item("respuesta")).await;

        let prompt = client.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Ley 1/2000 de Enjuiciamiento Civil"));
        assert!(prompt.contains("¿Qué es la rebeldía procesal?"));
    }
}
