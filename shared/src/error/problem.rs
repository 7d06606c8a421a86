//! Problem details (RFC 7807) bodies

use super::codes::ErrorCode;
use super::types::AppError;
use crate::models::EmployeeDraft;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Media type of problem bodies
pub const PROBLEM_JSON: &str = "application/problem+json";

/// Title used for every rejected employee submission
pub const SUBMISSION_TITLE: &str = "Bad Request. Please provide a valid JSON value";

/// Structured error payload
///
/// ```json
/// {
///   "title": "Bad Request. Please provide a valid JSON value",
///   "status": 400,
///   "detail": "{\"firstName\":\"value1\", ...}",
///   "reason": "role.id is required",
///   "code": 7,
///   "details": { "field": "role.id" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    pub detail: String,
    /// What exactly was wrong with the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub code: ErrorCode,
    /// Structured context of a client error, e.g. the offending field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Value>>,
}

impl From<&AppError> for ProblemDetails {
    fn from(err: &AppError) -> Self {
        let status = err.http_status();
        let details = err
            .details
            .as_ref()
            .filter(|_| status.is_client_error())
            .map(|d| d.iter().map(|(k, v)| (k.clone(), v.clone())).collect());

        if err.code.is_submission_error() {
            return Self {
                title: SUBMISSION_TITLE.to_string(),
                status: status.as_u16(),
                detail: EmployeeDraft::SUBMISSION_SHAPE.to_string(),
                reason: Some(err.message.clone()),
                code: err.code,
                details,
            };
        }

        let title = status.canonical_reason().unwrap_or("Error").to_string();
        // System errors never leak their cause
        let detail = if status.is_server_error() {
            err.code.message().to_string()
        } else {
            err.message.clone()
        };

        Self {
            title,
            status: status.as_u16(),
            detail,
            reason: None,
            code: err.code,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_problem_carries_shape() {
        let err = AppError::required_field("role.id");
        let problem = ProblemDetails::from(&err);
        assert_eq!(problem.title, SUBMISSION_TITLE);
        assert_eq!(problem.status, 400);
        assert_eq!(problem.detail, EmployeeDraft::SUBMISSION_SHAPE);
        assert_eq!(problem.reason.as_deref(), Some("role.id is required"));
        let details = problem.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "role.id");
    }

    #[test]
    fn test_system_problem_hides_cause() {
        let err = AppError::database("disk I/O error at page 12");
        let problem = ProblemDetails::from(&err);
        assert_eq!(problem.status, 500);
        assert_eq!(problem.title, "Internal Server Error");
        assert_eq!(problem.detail, "Database error");
        assert!(problem.reason.is_none());
        assert!(problem.details.is_none());
    }

    #[test]
    fn test_plain_bad_request_problem() {
        let err = AppError::invalid_request("Missing query parameter 'job'");
        let problem = ProblemDetails::from(&err);
        assert_eq!(problem.title, "Bad Request");
        assert_eq!(problem.detail, "Missing query parameter 'job'");
        assert!(problem.details.is_none());
    }

    #[test]
    fn test_details_are_rendered() {
        let err = AppError::role_invalid(99);
        let json = serde_json::to_value(ProblemDetails::from(&err)).unwrap();
        assert_eq!(json["details"]["field"], "role.id");
        assert_eq!(json["reason"], "Could not find role 99");
    }
}
