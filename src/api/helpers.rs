//! Response builders shared by the HTTP handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::errors::SummarizerError;

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

#[must_use]
pub fn status_for(error: &SummarizerError) -> StatusCode {
    match error {
        SummarizerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        SummarizerError::ConfigError(_)
        | SummarizerError::HttpError(_)
        | SummarizerError::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for SummarizerError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        match &self {
            SummarizerError::InvalidInput(message) => err_response(status, message),
            other => {
                error!("Request failed: {}", other);
                err_response(status, &other.to_string())
            }
        }
    }
}
