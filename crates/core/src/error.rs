//! Domain error model.

use thiserror::Error;

use crate::arg::ArgKind;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic validation failures raised by ledger
/// operations. Storage concerns belong to the inventory crate's `StoreError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument had the wrong kind (e.g. a number where a name was expected).
    #[error("{field} must be {expected}, got {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: ArgKind,
    },

    /// An argument had the right kind but an unacceptable value.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl DomainError {
    pub fn invalid_type(field: &'static str, expected: &'static str, found: ArgKind) -> Self {
        Self::InvalidType {
            field,
            expected,
            found,
        }
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }
}
