//! Data models for departments, units, and employees.

pub mod department;
pub mod employee;
pub mod unit;

pub use department::CreateDepartment;
pub use employee::{CreateEmployee, EmployeeListItem, gender};
pub use unit::CreateUnit;
