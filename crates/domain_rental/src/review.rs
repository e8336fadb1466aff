//! Review entity and validated rating
//!
//! A customer may review an apartment at most once, and only after a
//! completed stay there. The at-most-once rule is the reviews table's
//! primary key; the completed-stay rule is checked by the insert query.

use chrono::NaiveDate;
use core_kernel::{ApartmentId, CustomerId};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RentalError;

/// A star rating between 1 and 10 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(i16);

impl Rating {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 10;

    /// Creates a rating, rejecting values outside 1..=10
    pub fn new(value: i16) -> Result<Self, RentalError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RentalError::RatingOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw rating value
    pub fn get(&self) -> i16 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// A customer's review of an apartment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub customer_id: CustomerId,
    pub apartment_id: ApartmentId,
    pub review_date: NaiveDate,
    pub rating: Rating,
    pub text: String,
}

impl Review {
    /// Creates a new review
    ///
    /// # Errors
    ///
    /// Returns `RentalError::EmptyField` if the review text is empty or
    /// whitespace-only.
    pub fn new(
        customer_id: CustomerId,
        apartment_id: ApartmentId,
        review_date: NaiveDate,
        rating: Rating,
        text: impl Into<String>,
    ) -> Result<Self, RentalError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(RentalError::empty("review text"));
        }
        Ok(Self {
            customer_id,
            apartment_id,
            review_date,
            rating,
            text,
        })
    }
}
