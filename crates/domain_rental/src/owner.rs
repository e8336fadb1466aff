//! Apartment owner entity
//!
//! An owner is a person or company that lists apartments on the platform.
//! An owner may own many apartments; each apartment has at most one owner
//! (the ownership link itself lives in the database layer).

use core_kernel::OwnerId;
use serde::{Deserialize, Serialize};

use crate::error::RentalError;

/// An apartment owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
}

impl Owner {
    /// Creates a new owner
    ///
    /// # Errors
    ///
    /// Returns `RentalError::EmptyField` if the name is empty or
    /// whitespace-only.
    pub fn new(id: OwnerId, name: impl Into<String>) -> Result<Self, RentalError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RentalError::empty("owner name"));
        }
        Ok(Self { id, name })
    }
}
