//! Input validation helpers
//!
//! Names are free text; SQLite TEXT has no built-in length enforcement, so
//! the limit lives here.

use shared::AppError;
use std::fmt;

/// Person names (first / last)
pub const MAX_NAME_LEN: usize = 200;

/// What is wrong with a submitted field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    Empty,
    TooLong { len: usize, max: usize },
}

/// A single rejected field of a submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {issue}")]
pub struct FieldError {
    /// JSON path of the field, e.g. `role.id`
    pub field: &'static str,
    pub issue: FieldIssue,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing => f.write_str("is required"),
            FieldIssue::Empty => f.write_str("must not be empty"),
            FieldIssue::TooLong { len, max } => {
                write!(f, "is too long ({len} chars, max {max})")
            }
        }
    }
}

impl FieldError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            issue: FieldIssue::Missing,
        }
    }
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        match err.issue {
            FieldIssue::Missing => AppError::required_field(err.field),
            _ => AppError::validation(err.to_string()).with_detail("field", err.field),
        }
    }
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &'static str,
    max_len: usize,
) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError {
            field,
            issue: FieldIssue::Empty,
        });
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(FieldError {
            field,
            issue: FieldIssue::TooLong { len, max: max_len },
        });
    }
    Ok(())
}

/// Validate that an optional value was supplied
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, FieldError> {
    value.ok_or_else(|| FieldError::missing(field))
}
