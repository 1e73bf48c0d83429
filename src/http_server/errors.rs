//! API error mapping.
//!
//! Every failure crossing the HTTP boundary becomes a structured JSON
//! envelope: `{"error": ..., "code": ...}`, plus a `details` list for
//! validation failures so clients see every failing field at once.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::controllers::ControllerError;
use crate::schema::{FieldError, ValidationError};

/// Failures produced while handling a request.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Gate rejected the request.
    #[error("{0}")]
    Unauthorized(#[from] AuthError),

    /// Body was present but not parseable JSON.
    #[error("Request body must be valid JSON")]
    MalformedBody,

    /// One or more fields failed schema validation.
    #[error("Request validation failed")]
    Validation(#[from] ValidationError),

    /// Controller reported a failure.
    #[error("{0}")]
    Controller(#[from] ControllerError),
}

/// JSON error envelope.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FieldError>>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::MalformedBody => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Controller(ControllerError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Controller(ControllerError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Controller(ControllerError::Internal(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = match &self {
            ApiError::Validation(errors) => Some(errors.errors().to_vec()),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
            details,
        };
        (status, Json(body)).into_response()
    }
}
