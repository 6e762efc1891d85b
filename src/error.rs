//! Error types for the trellis CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for trellis operations.
///
/// Each variant maps to a specific exit code. User errors are detected before
/// any filesystem mutation; internal errors indicate a broken installation.
#[derive(Error, Debug)]
pub enum TrellisError {
    /// The destination path or entity name is already taken.
    #[error("{0}")]
    DestinationExists(String),

    /// Command was run outside the required project root.
    #[error("{0}")]
    NotInExpectedContext(String),

    /// The requested component type is not present in the registry.
    #[error("{0}")]
    UnknownComponentType(String),

    /// Generation parameters were malformed or failed schema validation.
    #[error("{0}")]
    InvalidParams(String),

    /// A shipped template tree could not be found. This is a packaging
    /// defect, not a user error.
    #[error("template directory not found: {0}")]
    TemplateMissing(String),

    /// Unexpected filesystem failure mid-operation.
    #[error("{0}")]
    Io(String),
}

impl TrellisError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TrellisError::DestinationExists(_) => exit_codes::USER_ERROR,
            TrellisError::NotInExpectedContext(_) => exit_codes::USER_ERROR,
            TrellisError::UnknownComponentType(_) => exit_codes::USER_ERROR,
            TrellisError::InvalidParams(_) => exit_codes::USER_ERROR,
            TrellisError::TemplateMissing(_) => exit_codes::INTERNAL_ERROR,
            TrellisError::Io(_) => exit_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type alias for trellis operations.
pub type Result<T> = std::result::Result<T, TrellisError>;
