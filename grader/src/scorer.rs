//! # Scorer Module
//!
//! Aggregates per-question [`EvaluationRecord`]s into exam-level statistics.

use crate::types::EvaluationRecord;
use serde::Serialize;

/// Sum and mean of record scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub total_score: f64,
    pub average_score: f64,
}

/// Computes the total and the average score of `records`.
///
/// The average is `total / len`, and 0 for an empty slice.
///
/// # Example
///
/// ```
/// use grader::scorer::aggregate;
///
/// let summary = aggregate(&[]);
/// assert_eq!(summary.total_score, 0.0);
/// assert_eq!(summary.average_score, 0.0);
/// ```
pub fn aggregate(records: &[EvaluationRecord]) -> ScoreSummary {
    let total_score: f64 = records.iter().map(|r| r.score).sum();
    let average_score = if records.is_empty() {
        0.0
    } else {
        total_score / records.len() as f64
    };

    ScoreSummary {
        total_score,
        average_score,
    }
}
