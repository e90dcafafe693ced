//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of stock operations. Storage
/// concerns belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument had the wrong shape (non-string item, non-integer quantity,
    /// empty name, out-of-range total).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The named item is not present in the stock.
    #[error("item not found: '{0}'")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    /// Missing items are reported as warnings rather than rejected input.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
