//! EMS - employee management data layer: startup seeding and listings.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ems::config::{AppConfig, ConfigLoadResult};
use ems::migration::Migrator;
use ems::models::gender;
use ems::seed::{self, MigrationOutcome};
use ems::{AppError, db, logging};
use sea_orm::DatabaseConnection;

/// Employee management data layer.
#[derive(Parser)]
#[command(name = "ems")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Run as production: apply pending migrations before seeding
    #[arg(long)]
    production: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Migrate (production only) and seed empty tables
    Init,
    /// List departments
    Departments {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List units
    Units {
        /// Only units of this department ID
        #[arg(long)]
        department: Option<i32>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List employees
    Employees {
        /// Only employees of this unit ID
        #[arg(long)]
        unit: Option<i32>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = if cli.dev {
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };

    let (config, config_missing) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, false),
        ConfigLoadResult::Missing => (AppConfig::default(), true),
        ConfigLoadResult::Invalid(e) => {
            return Err(AppError::from(e)).with_context(|| format!("Invalid config at {}", config_path.display()));
        }
    };

    let log_dir = config
        .logging
        .directory
        .clone()
        .or_else(|| if cli.dev { None } else { AppConfig::default_log_dir() });
    let _log_guard = logging::init(&config.logging, log_dir.as_deref());

    tracing::info!("EMS starting...");
    tracing::info!("Config path: {:?}", config_path);
    if config_missing {
        tracing::warn!("Config missing, using defaults");
    }

    let is_production = cli.production || config.environment.production;
    let command = cli.command.unwrap_or(Command::Init);

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(run(command, &config, is_production))
}

async fn run(command: Command, config: &AppConfig, is_production: bool) -> anyhow::Result<()> {
    let conn = db::connect(&config.database.connection_string())
        .await
        .context("Failed to connect to database")?;

    if let Ok(version) = db::get_version(&conn).await {
        tracing::info!("Database: {}", version);
    }

    let result = match command {
        Command::Init => init(&conn, is_production).await.map_err(anyhow::Error::from),
        Command::Departments { json } => list_departments(&conn, json).await,
        Command::Units { department, json } => list_units(&conn, department, json).await,
        Command::Employees { unit, json } => list_employees(&conn, unit, json).await,
    };

    conn.close().await.context("Failed to close database connection")?;
    result
}

/// Run the startup initializer and log the outcome.
async fn init(conn: &DatabaseConnection, is_production: bool) -> ems::Result<()> {
    tracing::info!("Initializing database (production: {})", is_production);

    let report = seed::initialize::<Migrator>(conn, is_production).await?;
    if let MigrationOutcome::Failed(message) = &report.migration {
        tracing::warn!("Seeding ran without migrations: {}", message);
    }
    tracing::info!(
        "Seed result: departments {:?}, units {:?}, employees {:?}",
        report.departments,
        report.units,
        report.employees
    );

    let counts = db::get_table_counts(conn).await?;
    tracing::info!(
        "Tables: {} departments, {} units, {} employees",
        counts.departments,
        counts.units,
        counts.employees
    );
    Ok(())
}

async fn list_departments(conn: &DatabaseConnection, json: bool) -> anyhow::Result<()> {
    let rows = db::department::list_all(conn).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in rows {
        println!("{:>4}  {:<6}  {}", row.id, row.code, row.name);
    }
    Ok(())
}

async fn list_units(conn: &DatabaseConnection, department: Option<i32>, json: bool) -> anyhow::Result<()> {
    let rows = match department {
        Some(id) => db::unit::list_for_department(conn, id).await?,
        None => db::unit::list_all(conn).await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in rows {
        println!("{:>4}  dept {:>3}  {}", row.id, row.department_id, row.name);
    }
    Ok(())
}

async fn list_employees(conn: &DatabaseConnection, unit: Option<i32>, json: bool) -> anyhow::Result<()> {
    let rows = match unit {
        Some(id) => db::employee::list_for_unit(conn, id).await?,
        None => db::employee::list(conn).await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in rows {
        println!(
            "{:>4}  {:<6}  {:<24}  {:<6}  {}  {}",
            row.id,
            row.employee_code,
            row.full_name(),
            gender::label(row.gender),
            row.joined_date,
            row.email.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
