//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bulletin_domain::error::BulletinError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BulletinError`] to an HTTP response with the appropriate status code.
pub struct ApiError(BulletinError);

impl From<BulletinError> for ApiError {
    fn from(err: BulletinError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BulletinError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            BulletinError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            BulletinError::Storage(err) => {
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
