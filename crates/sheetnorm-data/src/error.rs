//! Error types for the data engine.

use thiserror::Error;

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or normalizing a workbook
#[derive(Debug, Error)]
pub enum DataError {
    /// Unsupported file type or corrupt workbook
    #[error("Unsupported or unreadable workbook: {0}")]
    Format(String),

    /// Selected sheet does not exist in the workbook
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Raw table violates the shape contract
    #[error("Processing error: {0}")]
    Processing(String),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Stable, caller-visible error classification
    pub fn code(&self) -> &'static str {
        match self {
            DataError::Format(_) => "FORMAT_ERROR",
            DataError::SheetNotFound(_) => "SHEET_NOT_FOUND",
            DataError::Processing(_) => "PROCESSING_ERROR",
            DataError::Config(_) => "CONFIG_ERROR",
            DataError::Io(_) => "IO_ERROR",
        }
    }
}

impl From<toml::de::Error> for DataError {
    fn from(err: toml::de::Error) -> Self {
        DataError::Config(err.to_string())
    }
}
