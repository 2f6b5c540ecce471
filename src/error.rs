//! Library error types

use thiserror::Error;

/// Errors returned by a `DocumentRepository`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("document '{0}' not found")]
    NotFound(String),

    #[error("document '{0}' already exists")]
    DuplicateId(String),

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
