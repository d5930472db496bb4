//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use contactly_core::error::{AppError, ErrorKind};

/// Handler result carrying the HTTP-mappable error wrapper.
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper giving `AppError` an HTTP representation.
#[derive(Debug, Clone)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::ExternalService => {
                tracing::error!(error = %err.message, "External service failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "EXTERNAL_SERVICE_ERROR")
            }
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(error = %err.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(AppError::validation("bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::unauthorized("no")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::not_found("missing")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(AppError::conflict("dup")), StatusCode::CONFLICT);
        assert_eq!(
            status_of(AppError::external_service("smtp")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::internal("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
