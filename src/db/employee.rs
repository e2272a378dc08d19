//! Employee repository.

use crate::entities::{employees, prelude::*};
use crate::models::employee::{CreateEmployee, EmployeeListItem};
use crate::AppError;
use sea_orm::*;

/// List all employees as list view rows, ordered by employee code.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<EmployeeListItem>, DbErr> {
    let rows = Employees::find()
        .order_by_asc(employees::Column::EmployeeCode)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(EmployeeListItem::from).collect())
}

/// List employees of a single unit as list view rows.
pub async fn list_by_unit(db: &DatabaseConnection, unit_id: i32) -> Result<Vec<EmployeeListItem>, DbErr> {
    let rows = Employees::find()
        .filter(employees::Column::UnitId.eq(unit_id))
        .order_by_asc(employees::Column::EmployeeCode)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(EmployeeListItem::from).collect())
}

/// List employees of a unit that must exist.
pub async fn list_for_unit(db: &DatabaseConnection, unit_id: i32) -> crate::Result<Vec<EmployeeListItem>> {
    if Units::find_by_id(unit_id).one(db).await?.is_none() {
        return Err(AppError::not_found(format!("unit {unit_id}")));
    }
    Ok(list_by_unit(db, unit_id).await?)
}

/// Get employee by ID.
pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<employees::Model>, DbErr> {
    Employees::find_by_id(id).one(db).await
}

/// Create a new employee. The unit must already exist.
pub async fn create(db: &DatabaseConnection, data: CreateEmployee) -> Result<employees::Model, DbErr> {
    employees::ActiveModel::from(data).insert(db).await
}

/// Check if an employee code is already taken.
pub async fn code_exists(db: &DatabaseConnection, employee_code: &str) -> Result<bool, DbErr> {
    let count = Employees::find()
        .filter(employees::Column::EmployeeCode.eq(employee_code))
        .count(db)
        .await?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{department, unit};
    use crate::entities::sea_orm_active_enums::Gender;
    use crate::models::{CreateDepartment, CreateUnit};
    use chrono::NaiveDate;

    async fn setup_unit(db: &DatabaseConnection) -> i32 {
        let dept = department::create(
            db,
            CreateDepartment {
                code: "D001".to_string(),
                name: "Information Technology".to_string(),
            },
        )
        .await
        .unwrap();
        unit::create(
            db,
            CreateUnit {
                name: "Software Development".to_string(),
                description: None,
                department_id: dept.id,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn employee(code: &str, first: &str, unit_id: i32) -> CreateEmployee {
        CreateEmployee {
            employee_code: code.to_string(),
            first_name: first.to_string(),
            last_name: "Tan".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1994, 6, 14).unwrap(),
            gender: Gender::Female,
            joined_date: NaiveDate::from_ymd_opt(2019, 2, 8).unwrap(),
            email: None,
            phone: Some("+65 9876 5432".to_string()),
            address: None,
            unit_id,
        }
    }

    #[tokio::test]
    async fn test_list_projection_ordered_by_code() {
        let db = crate::db::test_support::migrated_db().await;
        let unit_id = setup_unit(&db).await;
        create(&db, employee("10002", "Lily", unit_id)).await.unwrap();
        create(&db, employee("10001", "Kevin", unit_id)).await.unwrap();

        let items = list(&db).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].employee_code, "10001");
        assert_eq!(items[0].full_name(), "Kevin Tan");
        assert_eq!(items[1].gender, Gender::Female);

        assert_eq!(list_by_unit(&db, unit_id).await.unwrap().len(), 2);
        assert!(list_by_unit(&db, unit_id + 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_for_unit_checks_existence() {
        let db = crate::db::test_support::migrated_db().await;
        let unit_id = setup_unit(&db).await;
        create(&db, employee("10001", "Kevin", unit_id)).await.unwrap();

        assert_eq!(list_for_unit(&db, unit_id).await.unwrap().len(), 1);

        let err = list_for_unit(&db, unit_id + 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_by_id_and_code_exists() {
        let db = crate::db::test_support::migrated_db().await;
        let unit_id = setup_unit(&db).await;
        let created = create(&db, employee("10011", "Kevin", unit_id)).await.unwrap();

        let found = get_by_id(&db, created.id).await.unwrap().unwrap();
        assert_eq!(found.unit_id, unit_id);
        assert!(code_exists(&db, "10011").await.unwrap());
        assert!(!code_exists(&db, "99999").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_unit_rejected() {
        let db = crate::db::test_support::migrated_db().await;
        assert!(create(&db, employee("10001", "Kevin", 404)).await.is_err());
    }

    #[tokio::test]
    async fn test_unknown_gender_value_rejected_on_read() {
        let db = crate::db::test_support::migrated_db().await;
        let unit_id = setup_unit(&db).await;
        db.execute_unprepared(&format!(
            "INSERT INTO employees (employee_code, first_name, last_name, date_of_birth, gender, joined_date, unit_id) \
             VALUES ('10099', 'Bad', 'Row', '1990-01-01', 7, '2020-01-01', {unit_id})"
        ))
        .await
        .unwrap();

        assert!(list(&db).await.is_err());
    }
}
