//! HTTP surface of the grading service.
//!
//! - `GET /health`
//! - `POST /api/exams/evaluate` grades a whole exam and returns the report envelope
//! - `POST /api/evaluate` forwards one prompt pair to the grading service

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod evaluate;
pub mod exams;
pub mod health;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest(
            "/api",
            Router::new()
                .route("/evaluate", post(evaluate::proxy_grade))
                .route("/exams/evaluate", post(exams::evaluate_exam)),
        )
        .with_state(state)
}
