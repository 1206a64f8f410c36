//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures raised before the store is touched.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The store could not be reached, including a missing connection URL.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("A post with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("Persistence failed: {0}")]
    Persistence(String),
}

impl RepoError {
    pub fn is_duplicate_slug(&self) -> bool {
        matches!(self, RepoError::DuplicateSlug(_))
    }
}
