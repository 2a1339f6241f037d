//! Employee entity model and DTOs.

use roster_core::store::NamedInput;
use roster_core::types::{DbId, Timestamp};
use roster_core::validation::FieldOrder;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Employee representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeResponse {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// DTO for creating a new employee.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployee {
    #[validate(required, length(min = 2, max = 155))]
    pub name: Option<String>,
}

impl FieldOrder for CreateEmployee {
    const FIELDS: &'static [&'static str] = &["name"];
}

impl NamedInput for CreateEmployee {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// DTO for replacing an employee's mutable fields.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmployee {
    #[validate(required, length(min = 2, max = 155))]
    pub name: Option<String>,
}

impl FieldOrder for UpdateEmployee {
    const FIELDS: &'static [&'static str] = &["name"];
}
