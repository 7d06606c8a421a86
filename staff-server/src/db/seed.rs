//! Role catalog seeding
//!
//! Runs once per process before the listener binds. Every catalog entry gets
//! a row, inserted in catalog order so a fresh database numbers them 1..=11.
//! Re-running against an already seeded database changes nothing.

use super::repository::role;
use crate::utils::AppError;
use shared::models::JobTitle;
use sqlx::SqlitePool;

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub existing: usize,
}

/// Insert missing catalog rows and verify the result
///
/// A catalog entry without a matching row, or a row whose salary drifted
/// from the catalog, is fatal.
pub async fn seed_roles(pool: &SqlitePool) -> Result<SeedReport, AppError> {
    let mut tx = pool
        .begin_with("BEGIN IMMEDIATE")
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let mut report = SeedReport::default();

    for job in JobTitle::all() {
        if role::insert_catalog_entry(&mut *tx, job).await? {
            report.inserted += 1;
        } else {
            report.existing += 1;
        }
    }

    for job in JobTitle::all() {
        match role::find_by_job(&mut *tx, job).await? {
            Some(row) => tracing::debug!(id = row.id, title = %job, "Role row verified"),
            None => {
                return Err(AppError::storage_corrupted(format!(
                    "catalog entry '{job}' has no role row"
                )));
            }
        }
    }

    tx.commit().await.map_err(|e| AppError::database(e.to_string()))?;
    Ok(report)
}
