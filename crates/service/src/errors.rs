use models::errors::ModelError;
use thiserror::Error;

/// Business errors surfaced by the vehicle workflows.
///
/// The display strings of `AlreadyExists` and `NotFound` are the exact messages
/// returned to API clients.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("Vehicle already registered")]
    AlreadyExists,
    #[error("Vehicle not found")]
    NotFound,
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::AlreadyExists => 1002,
            ServiceError::NotFound => 1003,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Conflict(_) => ServiceError::AlreadyExists,
            ModelError::NotFound(_) => ServiceError::NotFound,
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
