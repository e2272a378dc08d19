//! Unit repository.

use crate::entities::{prelude::*, units};
use crate::models::unit::CreateUnit;
use crate::AppError;
use sea_orm::*;

/// List all units ordered by ID.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<units::Model>, DbErr> {
    Units::find().order_by_asc(units::Column::Id).all(db).await
}

/// List units belonging to a department.
pub async fn list_by_department(db: &DatabaseConnection, department_id: i32) -> Result<Vec<units::Model>, DbErr> {
    Units::find()
        .filter(units::Column::DepartmentId.eq(department_id))
        .order_by_asc(units::Column::Id)
        .all(db)
        .await
}

/// List units of a department that must exist.
pub async fn list_for_department(db: &DatabaseConnection, department_id: i32) -> crate::Result<Vec<units::Model>> {
    if Departments::find_by_id(department_id).one(db).await?.is_none() {
        return Err(AppError::not_found(format!("department {department_id}")));
    }
    Ok(list_by_department(db, department_id).await?)
}

/// Get unit by ID.
pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<units::Model>, DbErr> {
    Units::find_by_id(id).one(db).await
}

/// Create a new unit. The department must already exist.
pub async fn create(db: &DatabaseConnection, data: CreateUnit) -> Result<units::Model, DbErr> {
    units::ActiveModel::from(data).insert(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::department;
    use crate::models::CreateDepartment;

    #[tokio::test]
    async fn test_list_by_department() {
        let db = crate::db::test_support::migrated_db().await;
        let it = department::create(
            &db,
            CreateDepartment {
                code: "D001".to_string(),
                name: "Information Technology".to_string(),
            },
        )
        .await
        .unwrap();
        let hr = department::create(
            &db,
            CreateDepartment {
                code: "D003".to_string(),
                name: "Human Resource".to_string(),
            },
        )
        .await
        .unwrap();

        for (name, department_id) in [("Software Development", it.id), ("Recruitment", hr.id), ("Infrastructure", it.id)] {
            create(
                &db,
                CreateUnit {
                    name: name.to_string(),
                    description: None,
                    department_id,
                },
            )
            .await
            .unwrap();
        }

        let names: Vec<_> = list_by_department(&db, it.id)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Software Development", "Infrastructure"]);
        assert_eq!(list_all(&db).await.unwrap().len(), 3);
        assert!(get_by_id(&db, 99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_for_department_checks_existence() {
        let db = crate::db::test_support::migrated_db().await;
        let it = department::create(
            &db,
            CreateDepartment {
                code: "D001".to_string(),
                name: "Information Technology".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(list_for_department(&db, it.id).await.unwrap().is_empty());

        let err = list_for_department(&db, it.id + 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), format!("Not found: department {}", it.id + 1));
    }

    #[tokio::test]
    async fn test_unknown_department_rejected() {
        let db = crate::db::test_support::migrated_db().await;
        let result = create(
            &db,
            CreateUnit {
                name: "Orphan".to_string(),
                description: None,
                department_id: 42,
            },
        )
        .await;
        assert!(result.is_err());
    }
}
