//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Attach the entity being looked up to a repository error.
    pub fn from_repo(err: RepoError, entity_type: &'static str, id: &str) -> Self {
        match err {
            RepoError::NotFound => DomainError::NotFound {
                entity_type,
                id: id.to_string(),
            },
            other => DomainError::Storage(other.to_string()),
        }
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Storage(err.to_string())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Errors raised while probing an external dependency.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("ping failed: {0}")]
    Ping(String),

    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),
}
