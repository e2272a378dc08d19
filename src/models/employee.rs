//! Employee DTOs and the list view projection.

use crate::entities::employees;
use crate::entities::sea_orm_active_enums::Gender;
use chrono::NaiveDate;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// DTO for creating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub joined_date: NaiveDate,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub unit_id: i32,
}

impl From<CreateEmployee> for employees::ActiveModel {
    fn from(data: CreateEmployee) -> Self {
        Self {
            employee_code: Set(data.employee_code),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            date_of_birth: Set(data.date_of_birth),
            gender: Set(data.gender),
            joined_date: Set(data.joined_date),
            email: Set(data.email),
            phone: Set(data.phone),
            address: Set(data.address),
            unit_id: Set(data.unit_id),
            ..Default::default()
        }
    }
}

/// Flattened employee row for list views.
///
/// Carries the scalar fields only; the owning unit is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeListItem {
    pub id: i32,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub joined_date: NaiveDate,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<employees::Model> for EmployeeListItem {
    fn from(model: employees::Model) -> Self {
        Self {
            id: model.id,
            employee_code: model.employee_code,
            first_name: model.first_name,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth,
            gender: model.gender,
            joined_date: model.joined_date,
            email: model.email,
            phone: model.phone,
            address: model.address,
        }
    }
}

impl EmployeeListItem {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Display labels for [`Gender`].
pub mod gender {
    use super::Gender;

    /// Get human-readable label for a gender value.
    pub fn label(gender: Gender) -> &'static str {
        match gender {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> employees::Model {
        employees::Model {
            id: 7,
            employee_code: "10007".to_string(),
            first_name: "Robert".to_string(),
            last_name: "Wong".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1984, 7, 7).unwrap(),
            gender: Gender::Male,
            joined_date: NaiveDate::from_ymd_opt(2016, 10, 22).unwrap(),
            email: Some("robert.wong@example.com".to_string()),
            phone: None,
            address: None,
            unit_id: 24,
        }
    }

    #[test]
    fn test_list_item_copies_scalar_fields() {
        let item = EmployeeListItem::from(sample_model());
        assert_eq!(item.id, 7);
        assert_eq!(item.employee_code, "10007");
        assert_eq!(item.full_name(), "Robert Wong");
        assert_eq!(item.email.as_deref(), Some("robert.wong@example.com"));
        assert!(item.phone.is_none());
    }

    #[test]
    fn test_list_item_json_has_no_unit() {
        let json = serde_json::to_value(EmployeeListItem::from(sample_model())).unwrap();
        assert!(json.get("unit_id").is_none());
        assert_eq!(json["date_of_birth"], "1984-07-07");
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(gender::label(Gender::Male), "Male");
        assert_eq!(gender::label(Gender::Female), "Female");
    }
}
