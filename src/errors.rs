//! Unified application error type.
//! All modules (dataset, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Dataset-related
    // ---------------------------
    #[error("Dataset error in {file}: {reason}")]
    Dataset { file: String, reason: String },

    #[error("No time log with id {0}")]
    LogNotFound(i64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period or range: {0}")]
    InvalidRange(String),

    #[error("Unknown export column: {0}")]
    InvalidColumn(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Overtime request validation
    // ---------------------------
    #[error("Requested overtime ({requested} min) exceeds the computed ceiling ({ceiling} min)")]
    OvertimeExceedsCeiling { requested: i64, ceiling: i64 },

    #[error("An overtime request needs a non-empty reason")]
    MissingReason,

    #[error("Time log {0} is still active; clock out before requesting overtime")]
    LogStillActive(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
