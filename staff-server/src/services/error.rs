//! Domain error taxonomy

use crate::db::repository::RepoError;
use crate::utils::AppError;
use crate::utils::validation::FieldError;
use std::fmt;
use thiserror::Error;

/// How a role was looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleKey {
    Id(i64),
    Title(String),
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleKey::Id(id) => write!(f, "{id}"),
            RoleKey::Title(title) => f.write_str(title),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Could not find employee {0}")]
    EmployeeNotFound(i64),

    #[error("Could not find role {0}")]
    RoleNotFound(RoleKey),

    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::Repo(err.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Rendering for direct lookups: missing resources are `404`
impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::EmployeeNotFound(id) => AppError::employee_not_found(id),
            ServiceError::RoleNotFound(key) => AppError::role_not_found(key),
            ServiceError::Validation(field) => field.into(),
            ServiceError::Repo(repo) => repo.into(),
        }
    }
}

impl ServiceError {
    /// Rendering for submitted employees: an unknown role is a bad submission
    pub fn into_submission_error(self) -> AppError {
        match self {
            ServiceError::RoleNotFound(RoleKey::Id(id)) => AppError::role_invalid(id),
            other => other.into(),
        }
    }
}
