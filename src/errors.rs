//! Unified application error type.
//! The engine itself never fails; these errors come from the host side
//! (config, dataset loading, argument parsing).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Dataset
    // ---------------------------
    #[error("Invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Dataset file not found: {0}")]
    DatasetNotFound(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid session: {0}")]
    InvalidSession(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid entry type: {0}")]
    InvalidEntryType(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type AppResult<T> = Result<T, AppError>;
