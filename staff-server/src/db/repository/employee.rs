//! Employee Repository

use super::RepoResult;
use shared::models::Employee;
use sqlx::SqliteExecutor;

const COLUMNS: &str = "id, first_name, last_name, role_id";

pub async fn find_all<'e, E: SqliteExecutor<'e>>(exec: E) -> RepoResult<Vec<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employee ORDER BY id");
    let rows = sqlx::query_as::<_, Employee>(&sql).fetch_all(exec).await?;
    Ok(rows)
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(
    exec: E,
    id: i64,
) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employee WHERE id = ?");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(exec)
        .await?;
    Ok(row)
}

pub async fn find_by_role_id<'e, E: SqliteExecutor<'e>>(
    exec: E,
    role_id: i64,
) -> RepoResult<Vec<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employee WHERE role_id = ? ORDER BY id");
    let rows = sqlx::query_as::<_, Employee>(&sql)
        .bind(role_id)
        .fetch_all(exec)
        .await?;
    Ok(rows)
}

/// Insert or overwrite an employee row
///
/// Without an id the store assigns one. With an id the row is overwritten
/// when present and inserted under that id otherwise.
pub async fn save<'e, E: SqliteExecutor<'e>>(
    exec: E,
    id: Option<i64>,
    first_name: &str,
    last_name: &str,
    role_id: i64,
) -> RepoResult<Employee> {
    let employee = match id {
        None => {
            let sql = format!(
                "INSERT INTO employee (first_name, last_name, role_id) VALUES (?, ?, ?) RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, Employee>(&sql)
                .bind(first_name)
                .bind(last_name)
                .bind(role_id)
                .fetch_one(exec)
                .await?
        }
        Some(id) => {
            let sql = format!(
                "INSERT INTO employee (id, first_name, last_name, role_id) VALUES (?, ?, ?, ?) \
                 ON CONFLICT(id) DO UPDATE SET first_name = excluded.first_name, \
                 last_name = excluded.last_name, role_id = excluded.role_id \
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, Employee>(&sql)
                .bind(id)
                .bind(first_name)
                .bind(last_name)
                .bind(role_id)
                .fetch_one(exec)
                .await?
        }
    };
    Ok(employee)
}

/// Delete by id. Returns whether a row was removed.
pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(exec: E, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(exec)
        .await?;
    Ok(result.rows_affected() > 0)
}
