//! Error types for the innovation server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use report_engine::ReportError;
use serde::Serialize;
use shared_types::{PayloadError, QueryError};
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    #[error(transparent)]
    InvalidPayload(#[from] PayloadError),

    #[error("Report rendering failed: {0}")]
    Render(#[from] ReportError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::InvalidQuery(err) => {
                (StatusCode::BAD_REQUEST, "INVALID_QUERY", err.to_string())
            }
            ServerError::InvalidPayload(err) => {
                (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD", err.to_string())
            }
            ServerError::Render(err) => {
                tracing::error!("Report rendering failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    err.to_string(),
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
