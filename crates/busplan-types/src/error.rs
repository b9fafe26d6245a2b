//! Error types for busplan

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Read-only source: {0}")]
    ReadOnly(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
