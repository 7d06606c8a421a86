//! Unified error system for the staff directory
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ProblemDetails`]: Problem body rendered for rejected requests
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 8xxx: Staff errors (employees and roles)
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::employee_not_found(7);
//! assert_eq!(err.code, ErrorCode::EmployeeNotFound);
//! assert_eq!(err.http_status().as_u16(), 404);
//!
//! let err = AppError::required_field("role.id");
//! assert_eq!(err.code, ErrorCode::RequiredField);
//! assert_eq!(err.http_status().as_u16(), 400);
//! ```

mod category;
mod codes;
mod http;
mod problem;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use problem::{PROBLEM_JSON, ProblemDetails, SUBMISSION_TITLE};
pub use types::{AppError, AppResult};
