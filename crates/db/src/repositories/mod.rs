pub mod employee_repo;
pub mod role_repo;

pub use employee_repo::EmployeeRepo;
pub use role_repo::RoleRepo;
