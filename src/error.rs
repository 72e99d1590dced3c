use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Top-level error kinds
// ---------------------------------------------------------------------------

/// Every failure that can stop a load → validate → filter → export run.
///
/// Row-level problems are *not* in here: they are contained in
/// [`RowComputeError`] and travel inside the result list as error records.
#[derive(Debug, Error)]
pub enum SmartTempError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file format '{extension}'. Please use CSV, XLSX, or JSON.")]
    UnsupportedFormat { extension: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    FilterInput(#[from] FilterInputError),

    #[error("No file selected.")]
    NoFileSelected,

    #[error("No data to export. Run a calculation first.")]
    NoResults,

    #[error("Invalid JSON layout: {0}")]
    JsonLayout(String),

    #[error("Workbook has no worksheet")]
    EmptyWorkbook,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("PDF error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, SmartTempError>;

/// Raised by the validator when required columns are absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required columns: {}", .missing.join(","))]
pub struct SchemaError {
    pub missing: Vec<String>,
}

/// User-typed filter input that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterInputError {
    #[error("Max Time must be a number (got '{0}').\n\nExample: 2 or 5.5\nLeave it blank to skip this filter.")]
    InvalidMaxTime(String),

    #[error("Drink Type must only contain letters (got '{0}').\n\nExample: water, tea, iced coffee")]
    InvalidDrinkType(String),
}

/// Why a single row could not be turned into metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowComputeError {
    #[error("missing value for '{column}'")]
    MissingValue { column: String },

    #[error("could not convert '{value}' in '{column}' to float")]
    NotNumeric { column: String, value: String },
}
