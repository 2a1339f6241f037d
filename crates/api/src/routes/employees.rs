//! Route definitions for employees.

use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Employees routes mounted at `/employees`.
///
/// ```text
/// GET    /        -> list_employees
/// POST   /        -> create_employee
/// DELETE /        -> delete_employees
/// GET    /{id}    -> get_employee
/// PUT    /{id}    -> update_employee
/// DELETE /{id}    -> delete_employee
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employees::list_employees)
                .post(employees::create_employee)
                .delete(employees::delete_employees),
        )
        .route(
            "/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
}
