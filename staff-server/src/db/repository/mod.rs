//! Repository Module
//!
//! Stores for the two tables. Functions are generic over the SQLite executor
//! so that a service can run several of them inside one transaction.

pub mod employee;
pub mod role;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// The title matches no catalog entry
    #[error("Unknown job title: {0}")]
    UnknownJobTitle(String),

    /// A persisted row disagrees with the catalog or the schema
    #[error("Corrupted row: {0}")]
    Corrupted(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for crate::utils::AppError {
    fn from(err: RepoError) -> Self {
        use crate::utils::AppError;
        match err {
            RepoError::UnknownJobTitle(title) => AppError::role_not_found(title),
            RepoError::Corrupted(msg) => AppError::storage_corrupted(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}
