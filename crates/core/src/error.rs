//! Domain and repository error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type returned by repository contracts.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Domain-level error.
///
/// Construction-time validation failures. Storage concerns live in
/// [`RepositoryError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A customer was constructed without a name.
    #[error("a customer has to have a valid name")]
    InvalidName,

    /// A product was constructed without a name or description.
    #[error("missing values")]
    MissingValues,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Repository operation error.
///
/// `NotFound` and `AlreadyExists` describe the state of the repository;
/// `Backend` carries whatever the storage driver reported.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("the {entity} {id} was not found in the repository")]
    NotFound { entity: &'static str, id: String },

    #[error("the {entity} {id} already exists in the repository")]
    AlreadyExists { entity: &'static str, id: String },

    #[error("repository lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl core::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn already_exists(entity: &'static str, id: impl core::fmt::Display) -> Self {
        Self::AlreadyExists {
            entity,
            id: id.to_string(),
        }
    }

    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = RepositoryError::not_found("customer", "abc");
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "the customer abc was not found in the repository"
        );
    }

    #[test]
    fn backend_error_displays_source_unchanged() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline exceeded");
        let err = RepositoryError::backend(io);
        assert_eq!(err.to_string(), "deadline exceeded");
        assert!(!err.is_not_found());
        assert!(!err.is_already_exists());
    }
}
