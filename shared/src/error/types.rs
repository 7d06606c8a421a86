//! Error type and its HTTP rendering

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use super::problem::{PROBLEM_JSON, ProblemDetails};
use http::{StatusCode, header};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type surfaced to HTTP clients, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a required field error
    pub fn required_field(field: impl Into<String>) -> Self {
        let f = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", f))
            .with_detail("field", f)
    }

    /// Create an employee not found error
    pub fn employee_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::EmployeeNotFound,
            format!("Could not find employee {}", id),
        )
        .with_detail("id", id)
    }

    /// Create a role not found error, keyed by id or job title
    pub fn role_not_found(key: impl Display) -> Self {
        let key = key.to_string();
        Self::with_message(ErrorCode::RoleNotFound, format!("Could not find role {}", key))
            .with_detail("role", key)
    }

    /// Create an error for a submission that references an unknown role
    pub fn role_invalid(id: i64) -> Self {
        Self::with_message(ErrorCode::RoleInvalid, format!("Could not find role {}", id))
            .with_detail("field", "role.id")
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an invalid format error (malformed body)
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create a storage corrupted error
    pub fn storage_corrupted(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageCorrupted, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

/// Not-found errors are answered with a plain-text body naming the missing
/// resource; everything else becomes a problem body.
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();

        // Log system errors
        if matches!(self.code.category(), ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        if status == StatusCode::NOT_FOUND {
            return (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.message,
            )
                .into_response();
        }

        let problem = ProblemDetails::from(&self);
        match serde_json::to_vec(&problem) {
            Ok(body) => (status, [(header::CONTENT_TYPE, PROBLEM_JSON)], body).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize problem body");
                status.into_response()
            }
        }
    }
}
