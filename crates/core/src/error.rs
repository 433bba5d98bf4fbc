//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only construction of domain records can fail. Daily aging is total and
/// never produces one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item record was rejected at construction time.
    #[error("invalid item: {0}")]
    InvalidItem(String),
}

impl DomainError {
    pub fn invalid_item(msg: impl Into<String>) -> Self {
        Self::InvalidItem(msg.into())
    }
}
