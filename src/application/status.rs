// src/application/status.rs
use crate::application::error::ApplicationError;
use crate::domain::errors::DomainError;
use serde::Serialize;
use std::fmt;

/// Closed set of outcome statuses exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApiStatus {
    #[serde(rename = "OK")]
    Ok,
    Created,
    NotFound,
    InvalidPayload,
    Forbidden,
    Unauthorized,
    Conflict,
    UnexpectedError,
}

impl ApiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Ok => "OK",
            ApiStatus::Created => "Created",
            ApiStatus::NotFound => "NotFound",
            ApiStatus::InvalidPayload => "InvalidPayload",
            ApiStatus::Forbidden => "Forbidden",
            ApiStatus::Unauthorized => "Unauthorized",
            ApiStatus::Conflict => "Conflict",
            ApiStatus::UnexpectedError => "UnexpectedError",
        }
    }

    pub fn http_code(&self) -> u16 {
        match self {
            ApiStatus::Ok => 200,
            ApiStatus::Created => 201,
            ApiStatus::InvalidPayload => 400,
            ApiStatus::Unauthorized => 401,
            ApiStatus::Forbidden => 403,
            ApiStatus::NotFound => 404,
            ApiStatus::Conflict => 409,
            ApiStatus::UnexpectedError => 500,
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ApiStatus {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(_) => ApiStatus::InvalidPayload,
            DomainError::NotFound(_) => ApiStatus::NotFound,
            DomainError::Conflict(_) => ApiStatus::Conflict,
            DomainError::Persistence(_) => ApiStatus::UnexpectedError,
        }
    }
}

impl From<&ApplicationError> for ApiStatus {
    fn from(err: &ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(domain) => ApiStatus::from(domain),
            ApplicationError::Validation(_) => ApiStatus::InvalidPayload,
            ApplicationError::NotFound(_) => ApiStatus::NotFound,
            ApplicationError::Conflict(_) => ApiStatus::Conflict,
            ApplicationError::Unauthorized(_) => ApiStatus::Unauthorized,
            ApplicationError::Forbidden(_) => ApiStatus::Forbidden,
            ApplicationError::Infrastructure(_) => ApiStatus::UnexpectedError,
        }
    }
}
