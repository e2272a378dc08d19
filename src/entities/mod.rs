//! SeaORM entities for the EMS schema.

pub mod prelude;

pub mod departments;
pub mod employees;
pub mod sea_orm_active_enums;
pub mod units;
