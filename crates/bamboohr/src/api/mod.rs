//! API endpoint implementations.

mod employees;
mod files;

pub use employees::EmployeesApi;
pub use files::FilesApi;
