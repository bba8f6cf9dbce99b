//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant carries the full human-readable message; `Display` renders
/// only that message so callers can surface it verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was out of its allowed range (e.g. a negative amount).
    #[error("{0}")]
    InvalidArgument(String),

    /// The entity being created is already registered.
    #[error("{0}")]
    AlreadyExists(String),

    /// The entity being modified is not registered.
    #[error("{0}")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The message without any kind prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument(m)
            | DomainError::AlreadyExists(m)
            | DomainError::NotFound(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = DomainError::not_found("Cannot add inventory. Item not found: Amul, Ghee");
        assert_eq!(err.to_string(), "Cannot add inventory. Item not found: Amul, Ghee");
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn constructors_pick_the_matching_variant() {
        assert!(matches!(DomainError::invalid_argument("x"), DomainError::InvalidArgument(_)));
        assert!(matches!(DomainError::already_exists("x"), DomainError::AlreadyExists(_)));
        assert!(matches!(DomainError::not_found("x"), DomainError::NotFound(_)));
    }
}
