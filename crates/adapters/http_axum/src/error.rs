//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use alcove_domain::error::AlcoveError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`AlcoveError`] to an HTTP response with appropriate status code.
pub struct ApiError(AlcoveError);

impl From<AlcoveError> for ApiError {
    fn from(err: AlcoveError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AlcoveError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AlcoveError::Unauthorized => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            AlcoveError::Conflict => (StatusCode::CONFLICT, self.0.to_string()),
            AlcoveError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            AlcoveError::Remote(err) => {
                tracing::warn!(error = %err, "catalog fetch failed");
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }
            AlcoveError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
