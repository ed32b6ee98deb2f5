//! # Application Error
//!
//! Maps request-level problems to structured HTTP responses.
//!
//! A DFA `REJECT` is deliberately *not* represented here: a malformed NIC
//! is a normal 200 response with a `REJECT` verdict. This type covers
//! malformed *usage* only — a body that is not a JSON object, a missing
//! `nic` field, a non-string candidate, an unknown route.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body or fields do not have the required shape.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unknown route.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
