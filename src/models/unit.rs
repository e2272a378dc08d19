//! Unit DTOs.

use crate::entities::units;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// DTO for creating a unit under an existing department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUnit {
    pub name: String,
    pub description: Option<String>,
    pub department_id: i32,
}

impl From<CreateUnit> for units::ActiveModel {
    fn from(data: CreateUnit) -> Self {
        Self {
            name: Set(data.name),
            description: Set(data.description),
            department_id: Set(data.department_id),
            ..Default::default()
        }
    }
}
