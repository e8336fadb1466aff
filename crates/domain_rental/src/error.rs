//! Rental domain errors

use core_kernel::identifiers::IdentifierError;
use core_kernel::temporal::TemporalError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the rental domain
#[derive(Debug, Error)]
pub enum RentalError {
    /// A required text field was empty or whitespace-only
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Reservation price must be positive
    #[error("Invalid total price: {0}")]
    InvalidPrice(Decimal),

    /// Review rating outside the allowed range
    #[error("Rating {0} is out of range ({min}..={max})", min = crate::review::Rating::MIN, max = crate::review::Rating::MAX)]
    RatingOutOfRange(i16),

    /// An identifier failed validation
    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// A stay period failed validation
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    /// Structured field validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl RentalError {
    /// Creates a ValidationFailed error from validator output
    pub fn from_validation(errors: validator::ValidationErrors) -> Self {
        RentalError::ValidationFailed(errors.to_string())
    }

    /// Creates an EmptyField error
    pub fn empty(field: &'static str) -> Self {
        RentalError::EmptyField(field)
    }
}
