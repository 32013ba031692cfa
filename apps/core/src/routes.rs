//! API routes
//!
//! `/ask` accepts the question either as a query parameter (GET) or as a
//! JSON body (POST). Every other method gets a JSON 405.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::{AskRequest, AskResponse, ErrorResponse};
use crate::server::AppState;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Ask Routes
// ============================================================================

pub fn ask_routes() -> Router<AppStateArc> {
    Router::new().route(
        "/ask",
        get(ask_get).post(ask_post).fallback(method_not_allowed),
    )
}

async fn ask_get(
    State(state): State<AppStateArc>,
    query: Result<Query<AskRequest>, QueryRejection>,
) -> Result<Json<AskResponse>, AppError> {
    let Query(request) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    answer_question(&state, request).await
}

async fn ask_post(
    State(state): State<AppStateArc>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, AppError> {
    let Json(request) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    answer_question(&state, request).await
}

async fn answer_question(
    state: &AppState,
    request: AskRequest,
) -> Result<Json<AskResponse>, AppError> {
    let request = request.trimmed();
    request.validate()?;

    let request_id = Uuid::new_v4();
    let span = info_span!("ask", %request_id);

    async move {
        info!("Question received: {:?}", request.question);

        let messages = state.source.fetch_messages().await?;
        let outcome = state.engine.analyze(&request.question, &messages);

        info!(
            source = ?outcome.source,
            intent = ?outcome.intent,
            no_match = ?outcome.no_match,
            "Answered from {} messages",
            messages.len()
        );

        Ok(Json(AskResponse {
            answer: outcome.answer,
        }))
    }
    .instrument(span)
    .await
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed. Use GET or POST.".to_string(),
        }),
    )
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub special_cases: usize,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
        uptime_seconds: state.start_time.elapsed().as_secs(),
        special_cases: state.engine.special_cases().len(),
    })
}
