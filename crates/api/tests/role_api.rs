//! HTTP-level integration tests for the `/roles` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_employee(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/employees", json!({ "name": name })).await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_unassigned_role(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/roles", json!({ "name": "Reviewer" })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Reviewer");
    assert!(json["data"]["employee_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_role_for_employee(pool: PgPool) {
    let employee_id = create_employee(&pool, "Ada").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/roles",
        json!({ "name": "Manager", "employee_id": employee_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["employee_id"], employee_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn role_for_unknown_employee_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/roles",
        json!({ "name": "Manager", "employee_id": 999999 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "role references a record that does not exist");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_positive_employee_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/roles",
        json!({ "name": "Manager", "employee_id": 0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Field employee_id must be at least 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn name_is_checked_before_employee_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/roles",
        json!({ "name": "M", "employee_id": 0 }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["error"], "Field name must be at least 2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_role_name_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/roles", json!({ "name": "Reviewer" })).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/roles", json!({ "name": "Reviewer" })).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "role with name 'Reviewer' already exists");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_employee_removes_its_roles(pool: PgPool) {
    let employee_id = create_employee(&pool, "Ada").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/roles",
        json!({ "name": "Lead", "employee_id": employee_id }),
    )
    .await;
    let role_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/employees/{employee_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/roles/{role_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_role_unassigns_when_employee_omitted(pool: PgPool) {
    let employee_id = create_employee(&pool, "Ada").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/roles",
        json!({ "name": "Lead", "employee_id": employee_id }),
    )
    .await;
    let role_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/roles/{role_id}"),
        json!({ "name": "Lead" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["employee_id"].is_null());
}
