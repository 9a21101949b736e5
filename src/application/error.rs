// src/application/error.rs
use crate::domain::{article::StatusTransitionError, errors::DomainError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Malformed or semantically invalid input.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Classifies a store failure that is not tied to caller input.
    ///
    /// `NotFound` coming from an ownership-scoped write must go through
    /// [`ApplicationError::from_scoped_write`] instead.
    pub fn from_store(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::Persistence(msg) => {
                tracing::error!(error = %msg, "article store failure");
                Self::Infrastructure(msg)
            }
        }
    }

    /// An `(id, author_id)` scoped write that matched nothing is reported as
    /// forbidden, never as not-found.
    pub fn from_scoped_write(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_) => {
                Self::forbidden("article does not exist or is not owned by the caller")
            }
            DomainError::Persistence(msg) => {
                tracing::error!(error = %msg, "article store failure");
                Self::Infrastructure(msg)
            }
            other => Self::Infrastructure(other.to_string()),
        }
    }
}

impl From<StatusTransitionError> for ApplicationError {
    fn from(err: StatusTransitionError) -> Self {
        if err.is_invalid_request() {
            Self::Validation(err.to_string())
        } else {
            Self::Forbidden(err.to_string())
        }
    }
}
