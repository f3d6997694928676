//! # CLI Error Type
//!
//! Unified error type for command handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  env vars ──► ConfigError ───────────┐                                  │
//! │                                      │                                  │
//! │  --add-region ──► ValidationError ───┼──► AppError ──► stderr, exit 1   │
//! │                                      │                                  │
//! │  quote form ──► FormErrors ──────────┘                                  │
//! │                                                                         │
//! │  Pricing itself never errors.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use retail_core::{CoreError, FormErrors, ValidationError};

use crate::config::ConfigError;

/// Error returned from command handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Startup configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A region table edit or form field was rejected.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(err.into())
    }
}

impl From<FormErrors> for AppError {
    fn from(err: FormErrors) -> Self {
        AppError::Core(err.into())
    }
}

/// Result type for command handlers.
pub type AppResult<T> = Result<T, AppError>;
