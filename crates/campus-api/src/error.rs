//! Error types for the Campus API layer.
//!
//! [`ApiError`] unifies all request failure modes into a single enum
//! that converts into an HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body is JSON carrying a human-readable `message` field; errors
//! are terminal for the request and never fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use campus_store::StoreError;

/// Errors that can occur while handling a Campus API request.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// A required field was missing from the request payload (400).
    #[error("{0}")]
    Validation(String),

    /// Login credentials did not match any user (401).
    #[error("Invalid credentials")]
    Unauthorized,

    /// The request had no principal, or the principal's role does not
    /// match the route's required role (403).
    #[error("Forbidden: Insufficient role")]
    Forbidden,

    /// A referenced id has no matching record (404).
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// Validation failure for a payload missing one or more fields.
    pub fn missing_fields() -> Self {
        Self::Validation(String::from("Missing required fields"))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Every store failure is a missing record; the Display text is
        // already the wire message.
        Self::NotFound(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Login failures carry an explicit success flag alongside the
        // message; every other error is just the message.
        let body = match &self {
            Self::Unauthorized => serde_json::json!({
                "success": false,
                "message": self.to_string(),
            }),
            _ => serde_json::json!({
                "message": self.to_string(),
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use campus_types::StudentId;

    use super::*;

    #[test]
    fn store_errors_map_to_not_found_with_wire_message() {
        let err = ApiError::from(StoreError::StudentNotFound(StudentId::new(9)));
        assert_eq!(err, ApiError::NotFound(String::from("Student not found")));
    }

    #[test]
    fn forbidden_uses_fixed_message() {
        assert_eq!(ApiError::Forbidden.to_string(), "Forbidden: Insufficient role");
    }
}
