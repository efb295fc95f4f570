//! HTTP-layer error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use threadline_core::error::DomainError;

use crate::envelope::Envelope;

/// HTTP wrapper around `DomainError` that renders the failure envelope.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self.0 {
            err @ DomainError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string(), None),
            DomainError::Validation(message) => (StatusCode::BAD_REQUEST, message, None),
            DomainError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message, None),
            // The underlying detail goes into the body. Acceptable for an
            // internal tool, a leak risk on a public surface.
            DomainError::Unexpected(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error".to_string(),
                Some(detail),
            ),
        };

        (status, Json(Envelope::failure(message, error))).into_response()
    }
}
