//! Role Repository
//!
//! Read-only apart from seeding. The `job_title` column holds the catalog
//! title; rows are mapped back through [`JobTitle`] on the way out.

use super::{RepoError, RepoResult};
use rust_decimal::Decimal;
use shared::models::{JobTitle, Role};
use sqlx::SqliteExecutor;
use std::str::FromStr;

#[derive(Debug, sqlx::FromRow)]
struct RoleRow {
    id: i64,
    job_title: String,
    annual_salary: String,
}

impl RoleRow {
    fn into_role(self) -> RepoResult<Role> {
        let job_title = JobTitle::from_str(&self.job_title)
            .map_err(|e| RepoError::Corrupted(format!("role {}: {e}", self.id)))?;
        let annual_salary = Decimal::from_str(&self.annual_salary).map_err(|e| {
            RepoError::Corrupted(format!("role {}: invalid salary '{}': {e}", self.id, self.annual_salary))
        })?;

        let role = Role {
            id: self.id,
            job_title,
            annual_salary,
        };
        if !role.matches_catalog() {
            return Err(RepoError::Corrupted(format!(
                "role {} ({}) has salary {}, catalog says {}",
                role.id,
                job_title,
                role.annual_salary,
                job_title.annual_salary()
            )));
        }
        Ok(role)
    }
}

pub async fn find_all<'e, E: SqliteExecutor<'e>>(exec: E) -> RepoResult<Vec<Role>> {
    let rows = sqlx::query_as::<_, RoleRow>(
        "SELECT id, job_title, annual_salary FROM role ORDER BY id",
    )
    .fetch_all(exec)
    .await?;
    rows.into_iter().map(RoleRow::into_role).collect()
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(exec: E, id: i64) -> RepoResult<Option<Role>> {
    let row = sqlx::query_as::<_, RoleRow>(
        "SELECT id, job_title, annual_salary FROM role WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(exec)
    .await?;
    row.map(RoleRow::into_role).transpose()
}

/// Find the persisted row for a catalog entry
pub async fn find_by_job<'e, E: SqliteExecutor<'e>>(
    exec: E,
    job: JobTitle,
) -> RepoResult<Option<Role>> {
    let row = sqlx::query_as::<_, RoleRow>(
        "SELECT id, job_title, annual_salary FROM role WHERE job_title = ? LIMIT 1",
    )
    .bind(job.title())
    .fetch_optional(exec)
    .await?;
    row.map(RoleRow::into_role).transpose()
}

/// Resolve a free-form title through the catalog, then look up its row
///
/// Fails with [`RepoError::UnknownJobTitle`] when the catalog has no such
/// title. `Ok(None)` means the catalog knows the title but the row is
/// missing, which only happens when seeding did not run.
pub async fn find_by_job_title<'e, E: SqliteExecutor<'e>>(
    exec: E,
    title: &str,
) -> RepoResult<Option<Role>> {
    let job = JobTitle::by_title(title)
        .ok_or_else(|| RepoError::UnknownJobTitle(title.to_string()))?;
    find_by_job(exec, job).await
}

pub async fn count<'e, E: SqliteExecutor<'e>>(exec: E) -> RepoResult<i64> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM role")
        .fetch_one(exec)
        .await?;
    Ok(n)
}

/// Insert the row for a catalog entry unless it already exists
///
/// Returns true when a row was inserted.
pub async fn insert_catalog_entry<'e, E: SqliteExecutor<'e>>(
    exec: E,
    job: JobTitle,
) -> RepoResult<bool> {
    let result = sqlx::query(
        "INSERT INTO role (job_title, annual_salary) VALUES (?, ?) ON CONFLICT(job_title) DO NOTHING",
    )
    .bind(job.title())
    .bind(job.annual_salary().to_string())
    .execute(exec)
    .await?;
    Ok(result.rows_affected() > 0)
}
