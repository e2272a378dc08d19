//! Database connection pool and utility functions.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, PaginatorTrait, Statement};
use std::time::Duration;
use tracing::log::LevelFilter;

/// Create a new database connection with configured pool settings.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt).await
}

/// Test database connection by executing a simple query.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Get the database server version string.
pub async fn get_version(db: &DatabaseConnection) -> Result<String, DbErr> {
    let backend = db.get_database_backend();
    let sql = match backend {
        sea_orm::DatabaseBackend::Sqlite => "SELECT sqlite_version() AS version",
        _ => "SELECT version() AS version",
    };

    let result = db.query_one(Statement::from_string(backend, sql.to_owned())).await?;

    match result {
        Some(row) => {
            let version: String = row.try_get("", "version")?;
            Ok(version)
        }
        None => Ok("Unknown".to_owned()),
    }
}

/// Get record counts for all tables.
pub async fn get_table_counts(db: &DatabaseConnection) -> Result<TableCounts, DbErr> {
    use crate::entities::prelude::*;
    use sea_orm::EntityTrait;

    let departments = Departments::find().count(db).await?;
    let units = Units::find().count(db).await?;
    let employees = Employees::find().count(db).await?;

    Ok(TableCounts {
        departments,
        units,
        employees,
    })
}

/// Table record counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub departments: u64,
    pub units: u64,
    pub employees: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::migrated_db;

    #[tokio::test]
    async fn test_connection_and_version() {
        let db = migrated_db().await;
        assert!(test_connection(&db).await.is_ok());
        let version = get_version(&db).await.unwrap();
        assert!(version.starts_with('3'));
    }

    #[tokio::test]
    async fn test_counts_on_empty_schema() {
        let db = migrated_db().await;
        let counts = get_table_counts(&db).await.unwrap();
        assert_eq!(
            counts,
            TableCounts {
                departments: 0,
                units: 0,
                employees: 0
            }
        );
    }
}
