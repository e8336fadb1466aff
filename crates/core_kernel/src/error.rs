//! Core error types used across the system

use crate::identifiers::IdentifierError;
use crate::temporal::TemporalError;
use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }
}
