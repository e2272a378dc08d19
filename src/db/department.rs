//! Department repository.

use crate::entities::{departments, prelude::*};
use crate::models::department::CreateDepartment;
use sea_orm::*;

/// List all departments ordered by code.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<departments::Model>, DbErr> {
    Departments::find()
        .order_by_asc(departments::Column::Code)
        .all(db)
        .await
}

/// Get department by ID.
pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<departments::Model>, DbErr> {
    Departments::find_by_id(id).one(db).await
}

/// Get department by its code.
pub async fn get_by_code(db: &DatabaseConnection, code: &str) -> Result<Option<departments::Model>, DbErr> {
    Departments::find()
        .filter(departments::Column::Code.eq(code))
        .one(db)
        .await
}

/// Create a new department.
pub async fn create(db: &DatabaseConnection, data: CreateDepartment) -> Result<departments::Model, DbErr> {
    departments::ActiveModel::from(data).insert(db).await
}

/// Check if department code exists (for validation).
pub async fn code_exists(db: &DatabaseConnection, code: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
    let mut query = Departments::find().filter(departments::Column::Code.eq(code));

    if let Some(id) = exclude_id {
        query = query.filter(departments::Column::Id.ne(id));
    }

    let count = query.count(db).await?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::migrated_db;

    fn dept(code: &str, name: &str) -> CreateDepartment {
        CreateDepartment {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let db = migrated_db().await;
        let created = create(&db, dept("D002", "Finance & Accounting")).await.unwrap();
        create(&db, dept("D001", "Information Technology")).await.unwrap();

        let by_id = get_by_id(&db, created.id).await.unwrap().unwrap();
        assert_eq!(by_id.code, "D002");

        let by_code = get_by_code(&db, "D001").await.unwrap().unwrap();
        assert_eq!(by_code.name, "Information Technology");
        assert!(get_by_code(&db, "D404").await.unwrap().is_none());

        let codes: Vec<_> = list_all(&db).await.unwrap().into_iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["D001", "D002"]);
    }

    #[tokio::test]
    async fn test_code_exists_with_exclusion() {
        let db = migrated_db().await;
        let created = create(&db, dept("D001", "Information Technology")).await.unwrap();

        assert!(code_exists(&db, "D001", None).await.unwrap());
        assert!(!code_exists(&db, "D001", Some(created.id)).await.unwrap());
        assert!(!code_exists(&db, "D002", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_code_rejected() {
        let db = migrated_db().await;
        create(&db, dept("D001", "Information Technology")).await.unwrap();
        assert!(create(&db, dept("D001", "Duplicate")).await.is_err());
    }
}
