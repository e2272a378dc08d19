//! Startup database initializer.
//!
//! In production, pending migrations are applied first. A failed migration is
//! logged and reported but never stops startup. Departments, units, and
//! employees are then seeded in that order, each table only while it is
//! still empty, so repeated runs leave existing data alone. Seeding errors
//! are returned to the caller and stop the remaining tables.

pub mod data;


use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryOrder, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use thiserror::Error;
use tracing::{error, info};

use crate::entities::{departments, employees, prelude::*, units};
use crate::models::{CreateDepartment, CreateEmployee, CreateUnit};
use data::{DEPARTMENTS, EMPLOYEES, UNITS};

/// Errors that abort seeding.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Query, insert, or commit failed for a table
    #[error("Failed to seed {table}: {source}")]
    Database {
        table: &'static str,
        #[source]
        source: DbErr,
    },

    /// A seed row names a parent row that does not exist
    #[error("Unresolved reference while seeding {table}: {reference}")]
    UnresolvedReference { table: &'static str, reference: String },

    /// The embedded data set is malformed
    #[error("Invalid seed data: {0}")]
    InvalidData(String),
}

impl SeedError {
    fn database(table: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::Database { table, source }
    }
}

/// Result of the migration step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Not running in production, migrations were not attempted.
    Skipped,
    /// All pending migrations were applied.
    Applied,
    /// Migration failed with the given message; seeding continued anyway.
    Failed(String),
}

/// What happened to a single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOutcome {
    /// The table was empty and this many rows were inserted.
    Seeded(u64),
    /// The table already had rows and was left untouched.
    AlreadyExists,
}

/// Summary of one initializer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub migration: MigrationOutcome,
    pub departments: TableOutcome,
    pub units: TableOutcome,
    pub employees: TableOutcome,
}

/// Run the startup initializer against `db`.
///
/// `M` is the migrator applied when `is_production` is set.
pub async fn initialize<M: MigratorTrait>(
    db: &DatabaseConnection,
    is_production: bool,
) -> Result<SeedReport, SeedError> {
    let migration = if is_production {
        apply_migrations::<M>(db).await
    } else {
        MigrationOutcome::Skipped
    };

    let departments = seed_departments(db).await?;
    let units = seed_units(db).await?;
    let employees = seed_employees(db).await?;

    Ok(SeedReport {
        migration,
        departments,
        units,
        employees,
    })
}

/// Apply pending migrations, logging instead of failing.
pub async fn apply_migrations<M: MigratorTrait>(db: &DatabaseConnection) -> MigrationOutcome {
    info!("Applying migrations...");
    match M::up(db, None).await {
        Ok(()) => {
            info!("Migrations applied");
            MigrationOutcome::Applied
        }
        Err(e) => {
            error!("Migration failed, continuing with existing schema: {}", e);
            MigrationOutcome::Failed(e.to_string())
        }
    }
}

async fn seed_departments(db: &DatabaseConnection) -> Result<TableOutcome, SeedError> {
    const TABLE: &str = "departments";

    if !is_empty::<Departments>(db).await.map_err(SeedError::database(TABLE))? {
        info!("Department data already exists");
        return Ok(TableOutcome::AlreadyExists);
    }

    info!("Seeding department data...");
    let rows: Vec<departments::ActiveModel> = DEPARTMENTS
        .iter()
        .map(|seed| {
            departments::ActiveModel::from(CreateDepartment {
                code: seed.code.to_owned(),
                name: seed.name.to_owned(),
            })
        })
        .collect();

    let inserted = insert_batch(db, TABLE, rows).await?;
    info!("Department data seeded ({} rows)", inserted);
    Ok(TableOutcome::Seeded(inserted))
}

async fn seed_units(db: &DatabaseConnection) -> Result<TableOutcome, SeedError> {
    const TABLE: &str = "units";

    if !is_empty::<Units>(db).await.map_err(SeedError::database(TABLE))? {
        info!("Unit data already exists");
        return Ok(TableOutcome::AlreadyExists);
    }

    info!("Seeding unit data...");
    let department_ids = department_ids(db).await.map_err(SeedError::database(TABLE))?;

    let mut rows = Vec::with_capacity(UNITS.len());
    for seed in UNITS {
        let department_id = *department_ids
            .get(seed.department_code)
            .ok_or_else(|| SeedError::UnresolvedReference {
                table: TABLE,
                reference: format!("department code {}", seed.department_code),
            })?;

        rows.push(units::ActiveModel::from(CreateUnit {
            name: seed.name.to_owned(),
            description: Some(seed.description.to_owned()),
            department_id,
        }));
    }

    let inserted = insert_batch(db, TABLE, rows).await?;
    info!("Unit data seeded ({} rows)", inserted);
    Ok(TableOutcome::Seeded(inserted))
}

async fn seed_employees(db: &DatabaseConnection) -> Result<TableOutcome, SeedError> {
    const TABLE: &str = "employees";

    if !is_empty::<Employees>(db).await.map_err(SeedError::database(TABLE))? {
        info!("Employee data already exists");
        return Ok(TableOutcome::AlreadyExists);
    }

    info!("Seeding employee data...");
    let unit_ids = unit_ids(db).await.map_err(SeedError::database(TABLE))?;

    let mut rows = Vec::with_capacity(EMPLOYEES.len());
    for seed in EMPLOYEES {
        let unit_id = *unit_ids
            .get(seed.unit_name)
            .ok_or_else(|| SeedError::UnresolvedReference {
                table: TABLE,
                reference: format!("unit {}", seed.unit_name),
            })?;

        rows.push(employees::ActiveModel::from(CreateEmployee {
            employee_code: seed.employee_code.to_owned(),
            first_name: seed.first_name.to_owned(),
            last_name: seed.last_name.to_owned(),
            date_of_birth: parse_date(seed.date_of_birth)?,
            gender: seed.gender,
            joined_date: parse_date(seed.joined_date)?,
            email: Some(seed.email.to_owned()),
            phone: Some(seed.phone.to_owned()),
            address: Some(seed.address.to_owned()),
            unit_id,
        }));
    }

    let inserted = insert_batch(db, TABLE, rows).await?;
    info!("Employee data seeded ({} rows)", inserted);
    Ok(TableOutcome::Seeded(inserted))
}

async fn is_empty<E: EntityTrait>(db: &DatabaseConnection) -> Result<bool, DbErr> {
    Ok(E::find().one(db).await?.is_none())
}

/// Insert all rows in one statement and commit.
async fn insert_batch<A>(db: &DatabaseConnection, table: &'static str, rows: Vec<A>) -> Result<u64, SeedError>
where
    A: ActiveModelTrait + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let txn = db.begin().await.map_err(SeedError::database(table))?;

    let inserted = <A::Entity as EntityTrait>::insert_many(rows)
        .exec_without_returning(&txn)
        .await
        .map_err(SeedError::database(table))?;

    txn.commit().await.map_err(SeedError::database(table))?;
    Ok(inserted)
}

/// Department code to id.
async fn department_ids(db: &DatabaseConnection) -> Result<HashMap<String, i32>, DbErr> {
    let rows = Departments::find().all(db).await?;
    Ok(rows.into_iter().map(|d| (d.code, d.id)).collect())
}

/// Unit name to id. Duplicate names resolve to the oldest unit.
async fn unit_ids(db: &DatabaseConnection) -> Result<HashMap<String, i32>, DbErr> {
    let rows = Units::find().order_by_asc(units::Column::Id).all(db).await?;

    let mut ids = HashMap::with_capacity(rows.len());
    for unit in rows {
        ids.entry(unit.name).or_insert(unit.id);
    }
    Ok(ids)
}

fn parse_date(value: &str) -> Result<NaiveDate, SeedError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| SeedError::InvalidData(format!("invalid date {value:?}: {e}")))
}
