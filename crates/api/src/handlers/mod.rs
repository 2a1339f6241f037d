pub mod employees;
pub mod roles;
