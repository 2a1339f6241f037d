//! Route definitions for roles.

use axum::routing::get;
use axum::Router;

use crate::handlers::roles;
use crate::state::AppState;

/// Roles routes mounted at `/roles`.
///
/// ```text
/// GET    /        -> list_roles
/// POST   /        -> create_role
/// DELETE /        -> delete_roles
/// GET    /{id}    -> get_role
/// PUT    /{id}    -> update_role
/// DELETE /{id}    -> delete_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(roles::list_roles)
                .post(roles::create_role)
                .delete(roles::delete_roles),
        )
        .route(
            "/{id}",
            get(roles::get_role)
                .put(roles::update_role)
                .delete(roles::delete_role),
        )
}
