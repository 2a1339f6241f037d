//! Repository for the `employees` table.

use roster_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Whether an employee with exactly this name exists.
    ///
    /// Takes a connection so it can run inside the caller's transaction.
    pub async fn exists_by_name(conn: &mut PgConnection, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM employees WHERE name = $1)")
            .bind(name)
            .fetch_one(conn)
            .await
    }

    /// Insert a new employee, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateEmployee,
    ) -> Result<Employee, sqlx::Error> {
        let query = format!("INSERT INTO employees (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .fetch_one(conn)
            .await
    }

    /// Find an employee by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all employees ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY id ASC");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// List the employees whose ID is in `ids`, ordered by ID ascending.
    pub async fn list_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = ANY($1) ORDER BY id ASC");
        sqlx::query_as::<_, Employee>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Replace an employee's name. `updated_at` is bumped by trigger.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("UPDATE employees SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee by ID. Their roles are removed by cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every employee whose ID is in `ids`.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_many(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
