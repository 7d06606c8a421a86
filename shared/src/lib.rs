//! Shared types for the staff directory
//!
//! Domain types used by the server and its clients: the job title catalog,
//! role and employee models, hypermedia views, and the unified error system.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Employee, EmployeeDraft, EmployeeWithRole, JobTitle, Role};
