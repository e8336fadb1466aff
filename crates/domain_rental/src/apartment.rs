//! Apartment entity and location value type
//!
//! Apartments are uniquely identified by id and also carry a natural key:
//! no two apartments may share the same (address, city, country) triple.
//! That uniqueness, like all cross-row rules, is enforced by the database.

use core_kernel::ApartmentId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::RentalError;

/// A rentable apartment listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Apartment {
    pub id: ApartmentId,
    /// Street address within the city
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: String,
    /// Living area in square meters
    #[validate(range(min = 1, message = "size must be positive"))]
    pub size_sqm: i32,
}

impl Apartment {
    /// Creates a new apartment listing
    ///
    /// # Errors
    ///
    /// Returns `RentalError::ValidationFailed` if any text field is empty
    /// or the size is not positive.
    pub fn new(
        id: ApartmentId,
        address: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        size_sqm: i32,
    ) -> Result<Self, RentalError> {
        let apartment = Self {
            id,
            address: address.into(),
            city: city.into(),
            country: country.into(),
            size_sqm,
        };
        apartment.validate().map_err(RentalError::from_validation)?;
        Ok(apartment)
    }

    /// The apartment's (city, country) location
    pub fn location(&self) -> Location {
        Location {
            city: self.city.clone(),
            country: self.country.clone(),
        }
    }
}

/// A (city, country) pair
///
/// Used by the analytics layer: an "omnipresent" owner owns at least one
/// apartment in every location present on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apartment_rejects_zero_size() {
        let id = ApartmentId::new(1).unwrap();
        assert!(Apartment::new(id, "1 Main St", "Haifa", "Israel", 0).is_err());
    }

    #[test]
    fn test_location_display() {
        let id = ApartmentId::new(1).unwrap();
        let apartment = Apartment::new(id, "1 Main St", "Haifa", "Israel", 80).unwrap();
        assert_eq!(apartment.location().to_string(), "Haifa, Israel");
    }
}
