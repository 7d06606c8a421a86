//! Database Module
//!
//! Handles SQLite connection pool, migrations and role seeding

pub mod repository;
pub mod seed;

use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Database service — owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the database, apply migrations and seed the role catalog
    ///
    /// `url` is a sqlx SQLite URL (`sqlite:staff.db`, `sqlite::memory:`).
    /// In-memory databases live inside a single connection, so the pool is
    /// pinned to one connection that never expires.
    pub async fn connect(url: &str) -> Result<Self, AppError> {
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let mut options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .foreign_keys(true)
            .busy_timeout(Duration::from_millis(5000));
        if !in_memory {
            options = options
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .optimize_on_close(true, None);
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(in_memory, "Database connection established (busy_timeout=5000ms)");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        let report = seed::seed_roles(&pool).await?;
        tracing::info!(
            inserted = report.inserted,
            existing = report.existing,
            "Role catalog seeded"
        );

        Ok(Self { pool })
    }
}

/// Fresh seeded in-memory pool for unit tests
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    DbService::connect("sqlite::memory:")
        .await
        .expect("in-memory database")
        .pool
}
