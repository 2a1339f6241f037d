//! Handlers for the `/roles` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roster_core::command::IdList;
use roster_core::types::DbId;
use roster_db::models::role::{CreateRole, UpdateRole};

use crate::error::AppResult;
use crate::query::IdsParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/roles
///
/// List all roles ordered by id, or only those named by `?ids=1,2,3`.
pub async fn list_roles(
    State(state): State<AppState>,
    Query(params): Query<IdsParams>,
) -> AppResult<impl IntoResponse> {
    let roles = match params.id_list()? {
        Some(ids) => state.roles.find_all_by_ids(&ids).await?,
        None => state.roles.find_all().await?,
    };

    Ok(Json(DataResponse { data: roles }))
}

/// POST /api/v1/roles
///
/// Create a role, optionally assigned to an existing employee.
pub async fn create_role(
    State(state): State<AppState>,
    Json(input): Json<CreateRole>,
) -> AppResult<impl IntoResponse> {
    let cancel = state.shutdown.child_token();
    let role = state.roles.create(&input, &cancel).await?;

    tracing::info!(
        role_id = role.id,
        name = %role.name,
        employee_id = ?role.employee_id,
        "Role created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: role })))
}

/// DELETE /api/v1/roles
pub async fn delete_roles(
    State(state): State<AppState>,
    Json(input): Json<IdList>,
) -> AppResult<impl IntoResponse> {
    state.roles.delete_by_ids(&input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let role = state.roles.find_by_id(id).await?;
    Ok(Json(DataResponse { data: role }))
}

/// PUT /api/v1/roles/{id}
///
/// Full update: an omitted `employee_id` unassigns the role.
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRole>,
) -> AppResult<impl IntoResponse> {
    let role = state.roles.update(id, &input).await?;
    Ok(Json(DataResponse { data: role }))
}

/// DELETE /api/v1/roles/{id}
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.roles.delete_by_id(id).await?;

    tracing::info!(role_id = id, "Role deleted");

    Ok(StatusCode::NO_CONTENT)
}
