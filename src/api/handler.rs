//! HTTP routes: liveness and the summarization endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::summarize::summarize_text;
use crate::ai::FallbackChain;
use crate::core::models::{StatusMessage, SummaryRequest, SummaryRequestBody, SummaryResponse};
use crate::errors::SummarizerError;

pub const LIVENESS_MESSAGE: &str = "AI Summarizer API is running";

#[derive(Clone)]
pub struct AppState {
    pub chain: Arc<FallbackChain>,
}

/// Builds the application router around a ready fallback chain.
pub fn router(chain: Arc<FallbackChain>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/summarize", post(summarize))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { chain })
}

async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

async fn summarize(
    State(state): State<AppState>,
    body: Result<Json<SummaryRequestBody>, JsonRejection>,
) -> Result<Json<SummaryResponse>, SummarizerError> {
    let Json(body) = body.map_err(|rejection| {
        warn!("Rejected summarize body: {}", rejection.body_text());
        SummarizerError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let request = SummaryRequest::try_from(body)?;
    Ok(Json(summarize_text(&state.chain, &request).await))
}
