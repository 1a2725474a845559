//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use catalogue_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiResponse;

/// An [`AppError`] on its way out as an envelope.
///
/// Handlers return `Result<_, ApiError>` and use `?` on service calls.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation
            | ErrorKind::Conflict
            | ErrorKind::InvalidReference
            | ErrorKind::Constraint => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Database
            | ErrorKind::Internal
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Internal server error");
        } else if self.0.kind.is_constraint_violation() {
            tracing::warn!(kind = %self.0.kind, error = %self.0.message, "Write rejected");
        }

        let body = ApiResponse::<()>::failure(self.0.message);
        (status, Json(body)).into_response()
    }
}
