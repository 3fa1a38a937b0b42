use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use grader::error::TransportError;
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GradeResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// POST /api/evaluate
///
/// Thin proxy so browsers never see the grading API key. Sends one
/// `systemPrompt`/`prompt` pair to the grading service and returns the raw text.
///
/// ### Responses
/// - `200 OK` `{ "text": "..." }`
/// - `400 Bad Request` when `prompt` or `systemPrompt` is missing or blank
/// - upstream status with `{ "error": <upstream body> }` when the service rejects the call
/// - `500 Internal Server Error` when no key is configured or the call fails otherwise
pub async fn proxy_grade(State(state): State<AppState>, Json(body): Json<GradeRequest>) -> Response {
    let Some(client) = state.grading_client() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "GEMINI_API_KEY not configured on server",
        );
    };

    let (Some(prompt), Some(system_prompt)) =
        (non_blank(body.prompt), non_blank(body.system_prompt))
    else {
        return error_response(StatusCode::BAD_REQUEST, "Missing prompt or systemPrompt");
    };

    match client.grade(&system_prompt, &prompt).await {
        Ok(text) => (StatusCode::OK, Json(GradeResponse { text })).into_response(),
        Err(TransportError::Status { status, body }) => {
            error!(status, "grading service rejected proxied request");
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            error_response(status, body)
        }
        Err(e) => {
            error!(error = %e, "proxied grading request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
