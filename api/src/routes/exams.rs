use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use grader::report::EvaluationReport;
use grader::types::AnswerItem;
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateExamRequest {
    pub answers: Vec<AnswerItem>,
    #[serde(default)]
    pub reference_material: Option<String>,
}

/// POST /api/exams/evaluate
///
/// Grades every answer of one exam, in order, and returns the aggregated report.
/// Individual grading failures never fail the request; they show up as `failed`
/// records in the report.
///
/// ### Request Body
/// ```json
/// {
///   "answers": [
///     {
///       "questionId": 1,
///       "questionText": "¿Cómo se determina la competencia objetiva?",
///       "studentAnswer": "Por la materia y la cuantía.",
///       "referenceAnswer": "Se determina por la materia y la cuantía."
///     }
///   ],
///   "referenceMaterial": "Tema 12 ..."
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the report as `data`. `data.cancelled` is `true` when the server
///   began shutting down mid-exam and the report only covers a prefix of the answers.
/// - `500 Internal Server Error` when no grading API key is configured.
pub async fn evaluate_exam(
    State(state): State<AppState>,
    Json(body): Json<EvaluateExamRequest>,
) -> (StatusCode, Json<ApiResponse<Option<EvaluationReport>>>) {
    let Some(client) = state.grading_client() else {
        error!("exam evaluation requested but GEMINI_API_KEY is not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("GEMINI_API_KEY not configured on server")),
        );
    };

    let mut job = state.exam_job(client.clone());
    if let Some(material) = body.reference_material.filter(|m| !m.trim().is_empty()) {
        job = job.with_reference_material(material);
    }

    info!(answers = body.answers.len(), "evaluating exam");
    let report = job
        .evaluate_batch_until(&body.answers, &state.shutdown_token())
        .await;

    let message = if report.cancelled {
        "Exam evaluation interrupted"
    } else {
        "Exam evaluated"
    };
    (StatusCode::OK, Json(ApiResponse::success(Some(report), message)))
}
