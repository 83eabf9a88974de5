//! REST endpoint for question generation.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::Catalog;
use super::model::{AnswerMap, Question};

/// Shared state for question routes.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

/// POST /generate-questions request body.
///
/// `metadata` and `answers` are optional and default to empty. `metadata`
/// is accepted for wire compatibility but no current rule reads it.
#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub name: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub answers: Option<AnswerMap>,
}

/// POST /generate-questions response body.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    #[serde(rename = "nextQuestions")]
    pub next_questions: Vec<Question>,
    pub progress: f64,
}

/// POST /generate-questions
///
/// Decode body → run the selector → encode result. Malformed bodies are
/// rejected by the extraction layer before this handler runs.
async fn generate_questions(
    State(state): State<AppState>,
    Json(body): Json<GenerateQuestionsRequest>,
) -> impl IntoResponse {
    let answers = body.answers.unwrap_or_default();
    let selection = state.catalog.select(&body.name, &answers);

    info!(
        product = %body.name,
        answered = answers.len(),
        pending = selection.questions.len(),
        progress = selection.progress,
        "Generated next questions"
    );

    Json(QuestionsResponse {
        next_questions: selection.questions,
        progress: selection.progress,
    })
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "question-gen"
    }))
}

/// Build the Axum router with the question REST routes.
pub fn question_routes(state: AppState) -> Router {
    Router::new()
        .route("/generate-questions", post(generate_questions))
        .route("/health", get(health))
        .with_state(state)
}
