//! Error types for daygrid.

use thiserror::Error;

use crate::forms::ValidationErrors;

/// Errors that can occur in daygrid operations.
#[derive(Error, Debug)]
pub enum DaygridError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Schedule not found: {0}")]
    NotFound(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),

    #[error("Could not generate a unique schedule id after {0} attempts")]
    IdCollision(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationErrors> for DaygridError {
    fn from(errors: ValidationErrors) -> Self {
        DaygridError::Validation(errors)
    }
}

/// Result type alias for daygrid operations.
pub type DaygridResult<T> = Result<T, DaygridError>;
