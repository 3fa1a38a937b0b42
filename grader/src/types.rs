//! # Types Module
//!
//! Core data structures that flow through the grading pipeline: the caller's
//! [`AnswerItem`]s going in, and the [`EvaluationRecord`]s coming out.

use serde::{Deserialize, Serialize};

/// One question of a submitted exam, as handed to the pipeline by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerItem {
    pub question_id: i64,
    pub question_text: String,
    /// Raw text typed by the test-taker. Missing means the question was skipped.
    #[serde(default)]
    pub student_answer: String,
    /// The stored model answer for the question.
    #[serde(alias = "correctAnswerText")]
    pub reference_answer: String,
}

impl AnswerItem {
    pub fn new(
        question_id: i64,
        question_text: impl Into<String>,
        student_answer: impl Into<String>,
        reference_answer: impl Into<String>,
    ) -> Self {
        Self {
            question_id,
            question_text: question_text.into(),
            student_answer: student_answer.into(),
            reference_answer: reference_answer.into(),
        }
    }

    /// True when the answer is empty or whitespace only.
    pub fn is_unanswered(&self) -> bool {
        self.student_answer.trim().is_empty()
    }
}

/// How an [`EvaluationRecord`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationStatus {
    /// Scored by the grading service.
    Graded,
    /// Blank answer; no call was made.
    Unanswered,
    /// Grading failed and a fallback record was substituted.
    Failed,
}

/// Score and feedback extracted from a model response, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationFields {
    /// Raw score as read from the response; may be out of range.
    pub score: f64,
    pub strengths: String,
    pub improvements: String,
    pub feedback: String,
}

/// The graded result for a single [`AnswerItem`].
///
/// `score` is always inside `[0, 10]` with one decimal; the constructors in
/// [`crate::evaluator`] are the only places records are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    pub question_id: i64,
    pub question_text: String,
    pub student_answer: String,
    pub reference_answer: String,
    pub score: f64,
    pub strengths: String,
    pub improvements: String,
    pub feedback: String,
    pub status: EvaluationStatus,
}

impl EvaluationRecord {
    pub(crate) fn for_item(
        item: &AnswerItem,
        score: f64,
        strengths: String,
        improvements: String,
        feedback: String,
        status: EvaluationStatus,
    ) -> Self {
        Self {
            question_id: item.question_id,
            question_text: item.question_text.clone(),
            student_answer: item.student_answer.clone(),
            reference_answer: item.reference_answer.clone(),
            score,
            strengths,
            improvements,
            feedback,
            status,
        }
    }
}
