//! # API Error Types
//!
//! Errors returned to the frontend when a command fails.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {"command":"add_item","name":"","price":"1"}                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ListStore::add_item ──► ValidationError::Required { field: "name" }   │
//! │         │                                                               │
//! │         ▼  From<ValidationError>                                        │
//! │  ApiError { code: VALIDATION_ERROR, message: "name is required" }      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  {"ok":false,"error":{"code":"VALIDATION_ERROR",...}}                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown item ids never produce an error; those commands are no-ops.

use grocyfy_core::ValidationError;
use serde::Serialize;

/// API error returned from commands.
///
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price must not be negative"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Input field the error refers to, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed; the list was not changed
    ValidationError,

    /// The command itself could not be decoded
    BadRequest,

    /// Unexpected failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            field: Some(err.field().to_string()),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Malformed command: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
