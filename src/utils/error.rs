// Error handling utilities
// Author: Gabriel Demetrios Lafis

use thiserror::Error;

use crate::auth::AuthError;
use crate::data::DataError;
use crate::query::QueryError;
use crate::transport::TransportError;

use super::ConfigError;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("Authentication error: {0}")]
    Authentication(AuthError),
    #[error("Decode error: {0}")]
    Decode(DataError),
    #[error("No valid field called \"{0}\"")]
    FieldNotFound(String),
    #[error("Invalid query: {0}")]
    Validation(#[from] QueryError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("No results have been decoded yet")]
    NoResults,
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::FieldNotFound(name) => AppError::FieldNotFound(name),
            other => AppError::Decode(other),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Transport(err) => AppError::Transport(err),
            other => AppError::Authentication(other),
        }
    }
}

/// Result type alias for AppError
pub type AppResult<T> = Result<T, AppError>;
