use thiserror::Error;

use tavern_core::{DomainError, RepositoryError};

/// Order workflow error.
///
/// Domain and repository failures pass through unchanged; the remaining
/// variants come from assembling the service.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("order service has no {0} repository configured")]
    MissingRepository(&'static str),

    #[error("invalid order service configuration: {0}")]
    Configuration(String),
}

impl OrderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(e) if e.is_not_found())
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::Repository(e) if e.is_already_exists())
    }
}
