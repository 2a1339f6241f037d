pub mod employees;
pub mod health;
pub mod roles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /employees           list (optionally ?ids=), create, bulk delete
/// /employees/{id}      get, update, delete
///
/// /roles               list (optionally ?ids=), create, bulk delete
/// /roles/{id}          get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees", employees::router())
        .nest("/roles", roles::router())
}
