//! Error types for ExportDash
//!
//! The checklist model has a single fault (an out-of-range edit); everything
//! else here belongs to the export, config and input layers around it.

use thiserror::Error;

/// Main error type for the dashboard library
#[derive(Error, Debug)]
pub enum ChecklistError {
    /// Edit targeted a row outside the fixed checklist
    #[error("Row index {index} is out of range (checklist has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Unrecognized status text from user input or config
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Unparseable date (e.g. the --today override)
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Spreadsheet writer errors
    #[error("Export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, ChecklistError>;
