//! Unified application error type.
//! All modules (import, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Input errors (raised before any parsing)
    // ---------------------------
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Spreadsheet container errors
    // ---------------------------
    #[error("Unreadable spreadsheet: {0}")]
    SheetRead(#[from] calamine::Error),

    #[error("Unreadable CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("The workbook contains no sheets")]
    EmptyWorkbook,

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("Spreadsheet write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Too many output columns: {0} (an xlsx sheet holds at most 16384)")]
    TooManyColumns(usize),

    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
