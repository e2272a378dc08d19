pub use super::departments::Entity as Departments;
pub use super::employees::Entity as Employees;
pub use super::units::Entity as Units;
