//! Database connection pool and operations.

pub mod connection;
pub mod department;
pub mod employee;
pub mod unit;

pub use connection::{TableCounts, connect, get_table_counts, get_version, test_connection};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};

    /// Fresh in-memory SQLite database without any tables.
    pub async fn empty_db() -> DatabaseConnection {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::connect(opt).await.expect("Failed to open in-memory database")
    }

    /// Fresh in-memory SQLite database with the schema applied.
    pub async fn migrated_db() -> DatabaseConnection {
        let db = empty_db().await;
        Migrator::up(&db, None).await.expect("Failed to apply migrations");
        db
    }
}
