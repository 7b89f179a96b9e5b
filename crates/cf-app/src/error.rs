//! Error types for the cf-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Data error: {0}")]
    Data(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<cf_data::DataError> for AppError {
    fn from(err: cf_data::DataError) -> Self {
        AppError::Data(err.to_string())
    }
}

impl From<cf_core::CfError> for AppError {
    fn from(err: cf_core::CfError) -> Self {
        AppError::Layout(err.to_string())
    }
}
