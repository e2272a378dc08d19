//! Error types and handling.

use thiserror::Error;

use crate::config::ConfigError;
use crate::seed::SeedError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Startup seeding failed
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a not found error with message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_error_converts() {
        let err: AppError = SeedError::InvalidData("bad date".to_string()).into();
        assert_eq!(err.to_string(), "Seed error: Invalid seed data: bad date");
    }

    #[test]
    fn test_config_error_converts() {
        let err: AppError = ConfigError::Validation("Database name cannot be empty".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(AppError::not_found("unit 7").to_string(), "Not found: unit 7");
    }
}
