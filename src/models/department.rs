//! Department DTOs.

use crate::entities::departments;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// DTO for creating a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartment {
    pub code: String,
    pub name: String,
}

impl From<CreateDepartment> for departments::ActiveModel {
    fn from(data: CreateDepartment) -> Self {
        Self {
            code: Set(data.code),
            name: Set(data.name),
            ..Default::default()
        }
    }
}
