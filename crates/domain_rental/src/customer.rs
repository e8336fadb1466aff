//! Customer entity

use core_kernel::CustomerId;
use serde::{Deserialize, Serialize};

use crate::error::RentalError;

/// A customer who reserves and reviews apartments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
}

impl Customer {
    /// Creates a new customer
    ///
    /// # Errors
    ///
    /// Returns `RentalError::EmptyField` if the name is empty or
    /// whitespace-only.
    pub fn new(id: CustomerId, name: impl Into<String>) -> Result<Self, RentalError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RentalError::empty("customer name"));
        }
        Ok(Self { id, name })
    }
}
