//! Role Service

use super::{RoleKey, ServiceError, ServiceResult};
use crate::db::repository::{RepoError, role};
use shared::models::Role;
use sqlx::{SqliteConnection, SqlitePool};

/// Read-only access to the seeded role catalog
#[derive(Clone)]
pub struct RoleService {
    pool: SqlitePool,
}

impl RoleService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_roles(&self) -> ServiceResult<Vec<Role>> {
        Ok(role::find_all(&self.pool).await?)
    }

    pub async fn get_role(&self, id: i64) -> ServiceResult<Role> {
        role::find_by_id(&self.pool, id)
            .await?
            .ok_or(ServiceError::RoleNotFound(RoleKey::Id(id)))
    }

    pub async fn get_role_by_title(&self, title: &str) -> ServiceResult<Role> {
        let mut conn = self.pool.acquire().await?;
        Self::resolve_title(&mut conn, title).await
    }

    /// Number of persisted roles
    pub async fn count(&self) -> ServiceResult<i64> {
        Ok(role::count(&self.pool).await?)
    }

    /// Resolve a role id on an open connection or transaction
    pub(crate) async fn resolve(conn: &mut SqliteConnection, id: i64) -> ServiceResult<Role> {
        role::find_by_id(&mut *conn, id)
            .await?
            .ok_or(ServiceError::RoleNotFound(RoleKey::Id(id)))
    }

    /// Resolve a job title on an open connection or transaction
    ///
    /// A title the catalog knows but the store lacks means seeding never ran;
    /// that is reported as corruption, not as a missing role.
    pub(crate) async fn resolve_title(
        conn: &mut SqliteConnection,
        title: &str,
    ) -> ServiceResult<Role> {
        match role::find_by_job_title(&mut *conn, title).await {
            Ok(Some(found)) => Ok(found),
            Ok(None) => Err(RepoError::Corrupted(format!("no role row for catalog title '{title}'")).into()),
            Err(RepoError::UnknownJobTitle(t)) => Err(ServiceError::RoleNotFound(RoleKey::Title(t))),
            Err(e) => Err(e.into()),
        }
    }
}
