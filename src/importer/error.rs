// ==========================================
// Importer error types
// ==========================================
// Tooling: thiserror derive macro
// Fatal conditions only; row-level problems are recovered in place
// (skipped lines, zero defaults) and never surface as errors.
// ==========================================

use thiserror::Error;

/// Merge stage error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .txt/.xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("Excel parse failure: {0}")]
    ExcelParseError(String),

    #[error("CSV parse failure: {0}")]
    CsvParseError(String),

    // ===== Structural errors =====
    #[error("required column missing in {source_name}: {column}")]
    MissingColumn {
        source_name: String,
        column: String,
    },

    #[error("source {0} contains no data rows")]
    EmptySource(String),

    // ===== Output errors =====
    #[error("failed to write canonical file {path}: {message}")]
    OutputWriteError { path: String, message: String },

    // ===== Configuration errors =====
    #[error("failed to read config {path}: {message}")]
    ConfigReadError { path: String, message: String },

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result alias
pub type ImportResult<T> = Result<T, ImportError>;
