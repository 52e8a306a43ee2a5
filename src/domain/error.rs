//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated input constraints.
/// They are raised before any computation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    /// Create an invalid-input error for `field`.
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidInput { field, .. } => field,
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
