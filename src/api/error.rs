// ==========================================
// API layer error types
// ==========================================
// Tooling: thiserror derive macro
// Filter inputs are valid by construction, so view calls themselves never
// fail; errors here cover loading the canonical file and export I/O.
// ==========================================

use thiserror::Error;

/// Portal view error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("canonical data file not found: {0} (run procesar-datos first)")]
    DataFileNotFound(String),

    #[error("failed to load canonical data: {0}")]
    DataLoadError(String),

    #[error("export failed: {0}")]
    ExportError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::DataLoadError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ApiError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result alias
pub type ApiResult<T> = Result<T, ApiError>;
