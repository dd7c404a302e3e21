use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::application::EvaluationService;
use crate::domain::evaluation::{EvaluationError, EvaluationRequest, ModelChoice};

pub struct AppState {
    pub evaluation_service: Arc<EvaluationService>,
}

pub fn app(service: Arc<EvaluationService>) -> Router {
    let state = Arc::new(AppState {
        evaluation_service: service,
    });

    // Wildcard CORS: the UI is served from a separate origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    Router::new()
        .route("/evaluate", post(evaluate))
        .route("/prompts", get(list_prompts))
        .route("/prompts/{id}", put(update_prompt))
        .layer(cors)
        .with_state(state)
}

#[derive(serde::Deserialize)]
pub struct EvaluateBody {
    pub source: String,
    pub translation: String,
    pub language: String,
    pub temperature: f32,
    pub llm: LlmSelector,
}

#[derive(serde::Deserialize)]
pub struct LlmSelector {
    pub value: String,
}

#[derive(serde::Deserialize)]
pub struct UpdatePromptBody {
    pub text: String,
}

async fn evaluate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EvaluateBody>,
) -> impl IntoResponse {
    let model_choice = match ModelChoice::parse(&payload.llm.value) {
        Ok(choice) => choice,
        Err(e) => return error_response(&e),
    };

    let request = EvaluationRequest {
        source: payload.source,
        translation: payload.translation,
        language: payload.language,
        model_choice,
        temperature: payload.temperature,
    };

    match state.evaluation_service.evaluate(&request).await {
        Ok(result) => (StatusCode::OK, Json(json!({ "rating": result.rating_text }))),
        Err(e) => error_response(&e),
    }
}

async fn list_prompts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.evaluation_service.list_prompts().await {
        Ok(prompts) => (StatusCode::OK, Json(json!({ "items": prompts }))),
        Err(e) => error_response(&e),
    }
}

async fn update_prompt(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePromptBody>,
) -> impl IntoResponse {
    match state.evaluation_service.update_prompt(&id, &payload.text).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))),
        Err(e) => error_response(&e),
    }
}

/// Uniform error envelope. The message text is echoed to the caller; the
/// status code classifies the failure instead of a blanket 500.
fn error_response(err: &EvaluationError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match err {
        EvaluationError::UnknownModelChoice(_) | EvaluationError::InvalidInput(_) => {
            StatusCode::BAD_REQUEST
        }
        EvaluationError::PromptNotFound(_) => StatusCode::NOT_FOUND,
        EvaluationError::Backend(_) => StatusCode::BAD_GATEWAY,
        EvaluationError::UnsupportedModel(_) | EvaluationError::Store(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    tracing::warn!(%err, status = status.as_u16(), "request failed");
    (status, Json(json!({ "error": err.to_string() })))
}
