pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod logging;
pub mod migration;
pub mod models;
pub mod seed;

pub use error::{AppError, Result};
