//! Role entity model and DTOs.
//!
//! A role may point at an employee through `employee_id`. The association is
//! one-way: employees do not track their roles, and deleting an employee
//! removes its roles through `ON DELETE CASCADE`.

use roster_core::store::NamedInput;
use roster_core::types::{DbId, Timestamp};
use roster_core::validation::FieldOrder;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub employee_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Role representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub id: DbId,
    pub name: String,
    pub employee_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            employee_id: role.employee_id,
            created_at: role.created_at,
            updated_at: role.updated_at,
        }
    }
}

/// DTO for creating a new role.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRole {
    #[validate(required, length(min = 2, max = 155))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub employee_id: Option<DbId>,
}

impl FieldOrder for CreateRole {
    const FIELDS: &'static [&'static str] = &["name", "employee_id"];
}

impl NamedInput for CreateRole {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// DTO for replacing a role's mutable fields. A missing `employee_id`
/// clears the association.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRole {
    #[validate(required, length(min = 2, max = 155))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub employee_id: Option<DbId>,
}

impl FieldOrder for UpdateRole {
    const FIELDS: &'static [&'static str] = &["name", "employee_id"];
}
