//! Role API Handlers

use axum::extract::State;
use shared::models::{CollectionView, RoleView};

use crate::api::extract::ApiPath;
use crate::core::ServerState;
use crate::hal::Hal;
use crate::utils::AppResult;

/// List all roles
pub async fn list(State(state): State<ServerState>) -> AppResult<Hal<CollectionView<RoleView>>> {
    let roles = state.roles.list_roles().await?;
    Ok(Hal(state.assembler.role_collection(&roles)))
}

/// Get role by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Hal<RoleView>> {
    let role = state.roles.get_role(id).await?;
    Ok(Hal(state.assembler.role_view(&role)))
}
