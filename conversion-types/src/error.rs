//! Error types for the conversion service.

use crate::ports::ProviderError;
use crate::validation::ValidationErrors;

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Document serialization error: {0}")]
    Serialization(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. A missing record is not an error;
/// lookups return `Option`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}
