//! Employee API Handlers

use axum::extract::State;
use http::StatusCode;
use serde::Deserialize;
use shared::models::{CollectionView, EmployeeDraft, EmployeeView};

use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::core::ServerState;
use crate::hal::{Created, Hal};
use crate::services::ServiceError;
use crate::utils::{AppError, AppResult};

/// Render a failed create/update; an unknown role is the client's fault here
fn rejected(err: ServiceError) -> AppError {
    let err = err.into_submission_error();
    if err.http_status().is_client_error() {
        tracing::warn!(code = %err.code, reason = %err.message, "Employee submission rejected");
    }
    err
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Hal<CollectionView<EmployeeView>>> {
    let employees = state.employees.list_employees().await?;
    let a = &state.assembler;
    Ok(Hal(a.employee_collection(&employees, a.employees_href())))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Hal<EmployeeView>> {
    let employee = state.employees.get_employee(id).await?;
    Ok(Hal(state.assembler.employee_view(&employee)))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(draft): ApiJson<EmployeeDraft>,
) -> AppResult<Created<EmployeeView>> {
    let employee = state
        .employees
        .create_employee(&draft)
        .await
        .map_err(rejected)?;
    let view = state.assembler.employee_view(&employee);
    Ok(Created {
        location: state.assembler.employee_href(view.id),
        body: view,
    })
}

/// Replace an employee, creating it under `id` if absent
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(draft): ApiJson<EmployeeDraft>,
) -> AppResult<Created<EmployeeView>> {
    let employee = state
        .employees
        .update_employee(id, &draft)
        .await
        .map_err(rejected)?;
    let view = state.assembler.employee_view(&employee);
    Ok(Created {
        location: state.assembler.employee_href(view.id),
        body: view,
    })
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    state.employees.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Employees holding the role with this id
pub async fn list_by_role_id(
    State(state): State<ServerState>,
    ApiPath(role_id): ApiPath<i64>,
) -> AppResult<Hal<CollectionView<EmployeeView>>> {
    let employees = state.employees.list_employees_by_role(role_id).await?;
    let a = &state.assembler;
    Ok(Hal(a.employee_collection(&employees, a.employees_by_role_id_href(role_id))))
}

/// Employees holding the role with this title (path form)
pub async fn list_by_role_path(
    State(state): State<ServerState>,
    ApiPath(job_title): ApiPath<String>,
) -> AppResult<Hal<CollectionView<EmployeeView>>> {
    let employees = state.employees.list_employees_by_role_title(&job_title).await?;
    let a = &state.assembler;
    Ok(Hal(a.employee_collection(&employees, a.employees_by_role_path_href(&job_title))))
}

#[derive(Debug, Deserialize)]
pub struct JobQuery {
    job: Option<String>,
}

/// Employees holding the role with this title (query form)
pub async fn list_by_role_param(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<JobQuery>,
) -> AppResult<Hal<CollectionView<EmployeeView>>> {
    let job_title = query
        .job
        .ok_or_else(|| AppError::invalid_request("Required request parameter 'job' is not present"))?;
    let employees = state.employees.list_employees_by_role_title(&job_title).await?;
    let a = &state.assembler;
    Ok(Hal(a.employee_collection(&employees, a.employees_by_role_param_href(&job_title))))
}
