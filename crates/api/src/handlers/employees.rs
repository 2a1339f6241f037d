//! Handlers for the `/employees` resource.
//!
//! Each handler delegates to the employee [`CommandService`] held in
//! [`AppState`]; classification into HTTP statuses happens in [`AppError`].
//!
//! [`CommandService`]: roster_core::command::CommandService
//! [`AppError`]: crate::error::AppError

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roster_core::command::IdList;
use roster_core::types::DbId;
use roster_db::models::employee::{CreateEmployee, UpdateEmployee};

use crate::error::AppResult;
use crate::query::IdsParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/employees
///
/// List all employees ordered by id, or only those named by `?ids=1,2,3`.
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<IdsParams>,
) -> AppResult<impl IntoResponse> {
    let employees = match params.id_list()? {
        Some(ids) => state.employees.find_all_by_ids(&ids).await?,
        None => state.employees.find_all().await?,
    };

    Ok(Json(DataResponse { data: employees }))
}

/// POST /api/v1/employees
///
/// Create an employee. The name must be unique; a taken name is a 409.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    let cancel = state.shutdown.child_token();
    let employee = state.employees.create(&input, &cancel).await?;

    tracing::info!(employee_id = employee.id, name = %employee.name, "Employee created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: employee })))
}

/// DELETE /api/v1/employees
///
/// Delete every employee in the `{ "ids": [..] }` body. Unknown ids are ignored.
pub async fn delete_employees(
    State(state): State<AppState>,
    Json(input): Json<IdList>,
) -> AppResult<impl IntoResponse> {
    state.employees.delete_by_ids(&input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = state.employees.find_by_id(id).await?;
    Ok(Json(DataResponse { data: employee }))
}

/// PUT /api/v1/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<impl IntoResponse> {
    let employee = state.employees.update(id, &input).await?;
    Ok(Json(DataResponse { data: employee }))
}

/// DELETE /api/v1/employees/{id}
///
/// Also removes the employee's roles.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.employees.delete_by_id(id).await?;

    tracing::info!(employee_id = id, "Employee deleted");

    Ok(StatusCode::NO_CONTENT)
}
