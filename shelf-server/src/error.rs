//! Mapping of shelf errors onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shelf_core::ShelfError;
use thiserror::Error;

/// Error returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Shelf(#[from] ShelfError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl ApiError {
    /// Status code and machine-readable error kind
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) | ApiError::Shelf(ShelfError::InvalidInput(_)) => {
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            ApiError::Shelf(ShelfError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Shelf(ShelfError::Decode(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "decode_error")
            }
            ApiError::Shelf(ShelfError::Stream(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "stream_error")
            }
            ApiError::Shelf(ShelfError::Io(_)) => (StatusCode::SERVICE_UNAVAILABLE, "io_error"),
            ApiError::Task(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }

        let body = Json(ErrorResponse {
            error,
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
