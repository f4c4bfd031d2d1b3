//! API error handling for the notedrive HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;

use crate::NoteDriveError;

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Bad request (400).
    BadRequest,
    /// Validation error (400) - for field-level validation errors.
    ValidationError,
    /// Not found (404).
    NotFound,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error code.
    pub code: ErrorCode,
    /// Human-readable message. Always generic; upstream detail stays
    /// in the server log.
    pub message: String,
    /// Field-level validation error details (only present for validation errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Vec<String>>>,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    details: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Create a validation error with field-level details.
    pub fn validation(details: HashMap<String, Vec<String>>) -> Self {
        Self {
            code: ErrorCode::ValidationError,
            message: "Validation failed".to_string(),
            details: Some(details),
        }
    }

    /// Create a validation error from validator::ValidationErrors.
    pub fn from_validation_errors(errors: validator::ValidationErrors) -> Self {
        let mut details: HashMap<String, Vec<String>> = HashMap::new();

        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                })
                .collect();
            details.insert(field.to_string(), messages);
        }

        Self::validation(details)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// The repository has already logged upstream failures with operation
// context, so translation stays silent here.
impl From<NoteDriveError> for ApiError {
    fn from(err: NoteDriveError) -> Self {
        match &err {
            NoteDriveError::NotFound(_) => ApiError::not_found("Note not found"),
            NoteDriveError::Validation(msg) => ApiError::bad_request(msg.clone()),
            _ => ApiError::internal("An internal error occurred"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_status() {
        assert_eq!(ErrorCode::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::ValidationError.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_constructors() {
        let err = ApiError::bad_request("bad");
        assert_eq!(err.code, ErrorCode::BadRequest);

        let err = ApiError::not_found("missing");
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = ApiError::internal("error");
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn test_validation_error() {
        let mut details = HashMap::new();
        details.insert("title".to_string(), vec!["Must not be empty".to_string()]);

        let err = ApiError::validation(details);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Validation failed");
        assert_eq!(
            err.details.unwrap().get("title").unwrap(),
            &vec!["Must not be empty".to_string()]
        );
    }

    #[test]
    fn test_from_not_found() {
        let err: ApiError = NoteDriveError::NotFound("note".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_from_upstream_is_generic_internal() {
        let err: ApiError = NoteDriveError::Upstream("HTTP 503 from provider".to_string()).into();
        assert_eq!(err.code, ErrorCode::InternalError);
        // Upstream detail must not leak to clients
        assert!(!err.message.contains("503"));
    }
}
