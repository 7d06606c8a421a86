//! Employee Service
//!
//! Submissions are validated before the store is touched. Resolving the
//! referenced role and writing the row happen in one transaction, so a
//! submission naming an unknown role never leaves a row behind.

use super::{RoleService, ServiceError, ServiceResult};
use crate::db::repository::{RepoError, employee, role};
use crate::utils::validation::{MAX_NAME_LEN, require, validate_required_text};
use shared::models::{Employee, EmployeeDraft, EmployeeWithRole, Role};
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;

/// Writers take the database lock up front so concurrent writers queue on
/// the busy timeout instead of failing a read-to-write upgrade.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

/// A draft that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
struct ValidDraft<'a> {
    first_name: &'a str,
    last_name: &'a str,
    role_id: i64,
}

fn validate_draft(draft: &EmployeeDraft) -> ServiceResult<ValidDraft<'_>> {
    validate_required_text(&draft.first_name, "firstName", MAX_NAME_LEN)?;
    validate_required_text(&draft.last_name, "lastName", MAX_NAME_LEN)?;
    let role_id = require(draft.role_id(), "role.id")?;
    Ok(ValidDraft {
        first_name: &draft.first_name,
        last_name: &draft.last_name,
        role_id,
    })
}

#[derive(Clone)]
pub struct EmployeeService {
    pool: SqlitePool,
}

impl EmployeeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_employees(&self) -> ServiceResult<Vec<EmployeeWithRole>> {
        let mut tx = self.pool.begin().await?;
        let employees = employee::find_all(&mut *tx).await?;
        let roles: HashMap<i64, Role> = role::find_all(&mut *tx)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();
        tx.commit().await?;

        employees
            .into_iter()
            .map(|e| -> ServiceResult<EmployeeWithRole> {
                let role = roles.get(&e.role_id).cloned().ok_or_else(|| {
                    RepoError::Corrupted(format!("employee {} references missing role {}", e.id, e.role_id))
                })?;
                Ok(EmployeeWithRole { employee: e, role })
            })
            .collect()
    }

    pub async fn get_employee(&self, id: i64) -> ServiceResult<EmployeeWithRole> {
        let mut tx = self.pool.begin().await?;
        let found = employee::find_by_id(&mut *tx, id)
            .await?
            .ok_or(ServiceError::EmployeeNotFound(id))?;
        let role = RoleService::resolve(&mut tx, found.role_id).await?;
        tx.commit().await?;
        Ok(EmployeeWithRole {
            employee: found,
            role,
        })
    }

    pub async fn create_employee(&self, draft: &EmployeeDraft) -> ServiceResult<EmployeeWithRole> {
        let valid = validate_draft(draft)?;
        let saved = self.save(None, valid).await?;
        tracing::info!(id = saved.employee.id, role_id = saved.role.id, "Employee created");
        Ok(saved)
    }

    /// Replace the employee at `id`, creating it under that id when absent
    pub async fn update_employee(
        &self,
        id: i64,
        draft: &EmployeeDraft,
    ) -> ServiceResult<EmployeeWithRole> {
        let valid = validate_draft(draft)?;
        let saved = self.save(Some(id), valid).await?;
        tracing::info!(id, role_id = saved.role.id, "Employee saved");
        Ok(saved)
    }

    pub async fn delete_employee(&self, id: i64) -> ServiceResult<()> {
        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;
        if employee::find_by_id(&mut *tx, id).await?.is_none() {
            return Err(ServiceError::EmployeeNotFound(id));
        }
        employee::delete_by_id(&mut *tx, id).await?;
        tx.commit().await?;
        tracing::info!(id, "Employee deleted");
        Ok(())
    }

    pub async fn list_employees_by_role(&self, role_id: i64) -> ServiceResult<Vec<EmployeeWithRole>> {
        let mut tx = self.pool.begin().await?;
        let role = RoleService::resolve(&mut tx, role_id).await?;
        let employees = Self::with_role(&mut tx, role).await?;
        tx.commit().await?;
        Ok(employees)
    }

    pub async fn list_employees_by_role_title(
        &self,
        title: &str,
    ) -> ServiceResult<Vec<EmployeeWithRole>> {
        let mut tx = self.pool.begin().await?;
        let role = RoleService::resolve_title(&mut tx, title).await?;
        let employees = Self::with_role(&mut tx, role).await?;
        tx.commit().await?;
        Ok(employees)
    }

    async fn with_role(
        conn: &mut SqliteConnection,
        role: Role,
    ) -> ServiceResult<Vec<EmployeeWithRole>> {
        let employees = employee::find_by_role_id(&mut *conn, role.id).await?;
        Ok(employees
            .into_iter()
            .map(|employee| EmployeeWithRole {
                employee,
                role: role.clone(),
            })
            .collect())
    }

    async fn save(&self, id: Option<i64>, draft: ValidDraft<'_>) -> ServiceResult<EmployeeWithRole> {
        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;
        let role = RoleService::resolve(&mut tx, draft.role_id).await?;
        let saved: Employee =
            employee::save(&mut *tx, id, draft.first_name, draft.last_name, role.id).await?;
        tx.commit().await?;
        Ok(EmployeeWithRole {
            employee: saved,
            role,
        })
    }
}
