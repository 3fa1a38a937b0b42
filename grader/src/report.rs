//! # Evaluation Report Module
//!
//! The [`EvaluationReport`] is what a batch hands back to its caller: the ordered
//! records plus exam-level statistics. Once returned it belongs to the caller; the
//! pipeline keeps no reference to it.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "evaluations": [
//!     { "questionId": 4, "questionText": "...", "studentAnswer": "...",
//!       "referenceAnswer": "...", "score": 8.5, "strengths": "...",
//!       "improvements": "...", "feedback": "...", "status": "graded" }
//!   ],
//!   "averageScore": 8.5,
//!   "totalScore": 8.5,
//!   "answeredCount": 1,
//!   "cancelled": false,
//!   "gradedAt": "2026-03-01T10:15:00Z"
//! }
//! ```

use crate::scorer::aggregate;
use crate::types::{EvaluationRecord, EvaluationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// One record per processed item, in input order.
    pub evaluations: Vec<EvaluationRecord>,
    pub average_score: f64,
    pub total_score: f64,
    /// Records whose answer was not blank.
    pub answered_count: usize,
    /// True when the batch stopped early and `evaluations` is a prefix of the input.
    pub cancelled: bool,
    pub graded_at: DateTime<Utc>,
}

impl EvaluationReport {
    pub fn from_records(evaluations: Vec<EvaluationRecord>, cancelled: bool) -> Self {
        let summary = aggregate(&evaluations);
        let answered_count = evaluations
            .iter()
            .filter(|r| r.status != EvaluationStatus::Unanswered)
            .count();

        Self {
            evaluations,
            average_score: summary.average_score,
            total_score: summary.total_score,
            answered_count,
            cancelled,
            graded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::from_records(Vec::new(), false)
    }
}
