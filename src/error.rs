//! Error types for the biblioteca application

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Catalog full: all {capacity} slots are in use")]
    CatalogFull { capacity: usize },

    #[error("Function '{0}' is not implemented")]
    NotImplemented(&'static str),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
