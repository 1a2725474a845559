//! Response DTOs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Message attached to successful responses.
pub const OK_MESSAGE: &str = "OK";

/// The `{ error, message, data }` envelope every endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request failed.
    pub error: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Payload, `null` when there is none.
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            error: false,
            message: OK_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    /// A failed envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            data: None,
        }
    }
}

/// An envelope paired with its HTTP status.
#[derive(Debug)]
pub struct Reply<T> {
    status: StatusCode,
    body: ApiResponse<T>,
}

impl<T: Serialize> Reply<T> {
    /// 200 with `data`.
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            body: ApiResponse::ok(data),
        }
    }

    /// 201 with the created row.
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: ApiResponse::ok(data),
        }
    }

    /// 404 with `error=false` and no data.
    pub fn absent(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ApiResponse {
                error: false,
                message: message.into(),
                data: None,
            },
        }
    }

    /// 200 with the row, or 404 with `absent_message`.
    pub fn found_or(row: Option<T>, absent_message: &str) -> Self {
        match row {
            Some(row) => Self::ok(row),
            None => Self::absent(absent_message),
        }
    }

    /// 200 echoing the deleted row with `removed_message`, or 404.
    pub fn removed_or(row: Option<T>, removed_message: &str, absent_message: &str) -> Self {
        match row {
            Some(row) => Self {
                status: StatusCode::OK,
                body: ApiResponse {
                    error: false,
                    message: removed_message.to_string(),
                    data: Some(row),
                },
            },
            None => Self::absent(absent_message),
        }
    }

    /// The HTTP status of this reply.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_keeps_error_false() {
        let reply = Reply::<u32>::found_or(None, "The item does not exist");
        assert_eq!(reply.status(), StatusCode::NOT_FOUND);
        assert!(!reply.body.error);
        assert!(reply.body.data.is_none());
    }

    #[test]
    fn test_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::ok(7)).unwrap();
        assert_eq!(json, serde_json::json!({"error": false, "message": "OK", "data": 7}));

        let json = serde_json::to_value(ApiResponse::<()>::failure("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"error": true, "message": "boom", "data": null}));
    }
}
