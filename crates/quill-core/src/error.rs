//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - every failure a post operation can surface.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid post id: {0:?}")]
    InvalidId(String),

    #[error("Post not found: {id}")]
    NotFound { id: PostId },

    #[error(transparent)]
    Store(#[from] RepoError),
}

/// Backing store errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
