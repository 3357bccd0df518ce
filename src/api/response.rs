//! Response types for the employee directory API.
//!
//! This module defines the error response structures and the mapping from
//! core outcomes to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code and optional rate-limit hint.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
    /// Forwarded `Retry-After` hint for 429 responses.
    pub retry_after: Option<String>,
}

impl ApiErrorResponse {
    /// 404 for a keyed lookup the upstream reported as absent.
    pub fn employee_not_found(id: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: ApiError::with_details(
                "EMPLOYEE_NOT_FOUND",
                format!("Employee not found: {}", id),
                "The upstream directory has no record with this id",
            ),
            retry_after: None,
        }
    }

    /// 429 with the upstream's retry hint forwarded when present.
    pub fn rate_limited(retry_after: Option<String>) -> Self {
        let error = match &retry_after {
            Some(hint) => ApiError::with_details(
                "RATE_LIMITED",
                "Upstream rate limit exceeded",
                format!("Retry after {} seconds", hint),
            ),
            None => ApiError::new("RATE_LIMITED", "Upstream rate limit exceeded"),
        };
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            error,
            retry_after,
        }
    }

    /// 500 for any transient upstream failure.
    pub fn upstream_failure() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::new("UPSTREAM_FAILURE", "Upstream directory call failed"),
            retry_after: None,
        }
    }

    /// 400 for an unreadable request body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
            retry_after: None,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        match self.retry_after {
            Some(hint) => (
                self.status,
                [(header::RETRY_AFTER, hint)],
                Json(self.error),
            )
                .into_response(),
            None => (self.status, Json(self.error)).into_response(),
        }
    }
}
