//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// `RoleInvalid` is a bad request rather than a 404: the missing role was
    /// named by a submitted field, not by the request path.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::EmployeeNotFound | Self::RoleNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::StorageCorrupted => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
